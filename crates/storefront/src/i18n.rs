//! Bilingual UI labels.
//!
//! Every page renders in English or Tamil, selected per request by the
//! `?lang=` query parameter. Product names and descriptions carry their own
//! Tamil fields; everything else comes from these static tables.

use urban_elephant_core::Language;

/// The label set for one language.
#[derive(Debug)]
pub struct Labels {
    // Header / navigation
    pub site_name: &'static str,
    pub nav_home: &'static str,
    pub nav_products: &'static str,
    pub nav_about: &'static str,
    pub nav_reviews: &'static str,
    pub nav_cart: &'static str,

    // Product listing and detail
    pub add_to_cart: &'static str,
    pub out_of_stock: &'static str,
    pub wood_type: &'static str,
    pub size: &'static str,
    pub weight: &'static str,
    pub feet: &'static str,
    pub kg: &'static str,
    pub cost: &'static str,
    pub gst: &'static str,
    pub packing: &'static str,
    pub freight: &'static str,

    // Cart
    pub cart_title: &'static str,
    pub cart_empty: &'static str,
    pub cart_empty_desc: &'static str,
    pub continue_shopping: &'static str,
    pub quantity: &'static str,
    pub price: &'static str,
    pub remove: &'static str,
    pub clear_cart: &'static str,
    pub subtotal: &'static str,
    pub shipping: &'static str,
    pub free_shipping: &'static str,
    pub grand_total: &'static str,
    pub proceed_to_checkout: &'static str,

    // Checkout
    pub checkout_title: &'static str,
    pub customer_details: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub pincode: &'static str,
    pub order_summary: &'static str,
    pub total: &'static str,
    pub proceed_to_payment: &'static str,
    pub payment_details: &'static str,
    pub scan_qr: &'static str,
    pub payment_instructions: &'static str,
    pub back_to_cart: &'static str,
    pub complete_payment: &'static str,

    // Thank you
    pub thank_you_title: &'static str,
    pub thank_you_subtitle: &'static str,
    pub thank_you_message: &'static str,

    // Reviews
    pub reviews_title: &'static str,
    pub write_review: &'static str,
    pub rating: &'static str,
    pub comment: &'static str,
    pub submit_review: &'static str,
    pub verified: &'static str,
}

impl Labels {
    /// The label set for a language.
    #[must_use]
    pub const fn get(language: Language) -> &'static Self {
        match language {
            Language::En => &EN,
            Language::Ta => &TA,
        }
    }
}

static EN: Labels = Labels {
    site_name: "The Urban Elephant",
    nav_home: "Home",
    nav_products: "Products",
    nav_about: "Elephants",
    nav_reviews: "Reviews",
    nav_cart: "Cart",

    add_to_cart: "Add to Cart",
    out_of_stock: "Out of Stock",
    wood_type: "Wood Type",
    size: "Size",
    weight: "Weight",
    feet: "ft",
    kg: "kg",
    cost: "Cost",
    gst: "GST",
    packing: "Packing",
    freight: "Freight",

    cart_title: "Shopping Cart",
    cart_empty: "Your cart is empty",
    cart_empty_desc: "Add some beautiful elephant statues to your cart to get started.",
    continue_shopping: "Continue Shopping",
    quantity: "Quantity",
    price: "Price",
    remove: "Remove",
    clear_cart: "Clear Cart",
    subtotal: "Subtotal",
    shipping: "Shipping",
    free_shipping: "Free",
    grand_total: "Grand Total",
    proceed_to_checkout: "Proceed to Checkout",

    checkout_title: "Checkout",
    customer_details: "Customer Details",
    name: "Full Name",
    email: "Email Address",
    phone: "Phone Number",
    address: "Street Address",
    city: "City",
    state: "State",
    pincode: "PIN Code",
    order_summary: "Order Summary",
    total: "Total",
    proceed_to_payment: "Proceed to Payment",
    payment_details: "Payment Details",
    scan_qr: "Scan QR Code to Pay",
    payment_instructions: "Scan the QR code with your UPI app to complete the payment. Your order will be processed once payment is verified.",
    back_to_cart: "Back to Cart",
    complete_payment: "I have completed the payment",

    thank_you_title: "Thank You for Your Order!",
    thank_you_subtitle: "Your order has been received",
    thank_you_message: "Your payment has been received and your order is being processed.",

    reviews_title: "Customer Reviews",
    write_review: "Write a Review",
    rating: "Rating",
    comment: "Your Review",
    submit_review: "Submit Review",
    verified: "Verified Purchase",
};

static TA: Labels = Labels {
    site_name: "தி அர்பன் எலிஃபண்ட்",
    nav_home: "முகப்பு",
    nav_products: "தயாரிப்புகள்",
    nav_about: "யானைகள் பற்றி",
    nav_reviews: "விமர்சனங்கள்",
    nav_cart: "கூடை",

    add_to_cart: "கூடையில் சேர்",
    out_of_stock: "கையிருப்பில் இல்லை",
    wood_type: "மர வகை",
    size: "அளவு",
    weight: "எடை",
    feet: "அடி",
    kg: "கிலோ",
    cost: "செலவு",
    gst: "ஜிஎஸ்டி",
    packing: "பேக்கிங்",
    freight: "போக்குவரத்து",

    cart_title: "ஷாப்பிங் கார்ட்",
    cart_empty: "உங்கள் கூடை காலியாக உள்ளது",
    cart_empty_desc: "தொடங்குவதற்கு உங்கள் கூடையில் சில அழகான யானை சிலைகளைச் சேர்க்கவும்.",
    continue_shopping: "ஷாப்பிங் தொடரவும்",
    quantity: "அளவு",
    price: "விலை",
    remove: "அகற்று",
    clear_cart: "கூடையை அழிக்கவும்",
    subtotal: "துணை மொத்தம்",
    shipping: "ஷிப்பிங்",
    free_shipping: "இலவசம்",
    grand_total: "மொத்த தொகை",
    proceed_to_checkout: "செக்அவுட்டுக்கு செல்லவும்",

    checkout_title: "செக்அவுட்",
    customer_details: "வாடிக்கையாளர் விவரங்கள்",
    name: "முழு பெயர்",
    email: "மின்னஞ்சல் முகவரி",
    phone: "தொலைபேசி எண்",
    address: "தெரு முகவரி",
    city: "நகரம்",
    state: "மாநிலம்",
    pincode: "பின் கோட்",
    order_summary: "ஆர்டர் சுருக்கம்",
    total: "மொத்தம்",
    proceed_to_payment: "பேமெண்ட்டுக்கு செல்லவும்",
    payment_details: "பேமெண்ட் விவரங்கள்",
    scan_qr: "பணம் செலுத்த QR கோட்டை ஸ்கேன் செய்யவும்",
    payment_instructions: "பேமெண்ட்டை முடிக்க உங்கள் UPI ஆப்புடன் QR கோட்டை ஸ்கேன் செய்யவும். பேமெண்ட் சரிபார்க்கப்பட்டவுடன் உங்கள் ஆர்டர் செயலாக்கப்படும்.",
    back_to_cart: "கார்ட்டுக்கு திரும்பு",
    complete_payment: "நான் பேமெண்ட்டை முடித்துவிட்டேன்",

    thank_you_title: "உங்கள் ஆர்டருக்கு நன்றி!",
    thank_you_subtitle: "உங்கள் ஆர்டர் பெறப்பட்டது",
    thank_you_message: "உங்கள் பேமெண்ட் பெறப்பட்டு உங்கள் ஆர்டர் செயலாக்கப்படுகிறது.",

    reviews_title: "வாடிக்கையாளர் விமர்சனங்கள்",
    write_review: "விமர்சனம் எழுதுங்கள்",
    rating: "மதிப்பீடு",
    comment: "உங்கள் விமர்சனம்",
    submit_review: "விமர்சனத்தை சமர்ப்பிக்கவும்",
    verified: "சரிபார்க்கப்பட்ட வாங்குதல்",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_languages_resolve() {
        assert_eq!(Labels::get(Language::En).cart_title, "Shopping Cart");
        assert_eq!(Labels::get(Language::Ta).cart_title, "ஷாப்பிங் கார்ட்");
    }

    #[test]
    fn test_breakdown_labels_are_localized() {
        assert_eq!(Labels::get(Language::En).gst, "GST");
        assert_eq!(Labels::get(Language::Ta).cost, "செலவு");
        assert_eq!(Labels::get(Language::Ta).freight, "போக்குவரத்து");
    }
}
