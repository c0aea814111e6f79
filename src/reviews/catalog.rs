//! Constant lookup tables for synthesized reviews

pub(crate) const REVIEWER_NAMES: &[&str] = &[
    "Sarah M.",
    "Emily R.",
    "Jessica T.",
    "Amanda K.",
    "Rachel B.",
    "Lauren H.",
    "Olivia P.",
    "Sophia L.",
    "Hannah W.",
    "Grace D.",
    "Chloe S.",
    "Megan F.",
    "Natalie C.",
    "Victoria J.",
    "Isabella N.",
    "Priya S.",
    "Aisha K.",
    "Mei L.",
    "Daniel G.",
    "Michael A.",
    "James P.",
    "Ryan T.",
    "David O.",
    "Chris V.",
];

pub(crate) const REVIEW_TITLES: &[&str] = &[
    "Absolutely stunning",
    "Even better in person",
    "Perfect gift",
    "Beautiful craftsmanship",
    "Exceeded my expectations",
    "My new favorite piece",
    "Elegant and timeless",
    "Worth every penny",
    "Sparkles beautifully",
    "She said yes!",
    "Gorgeous everyday piece",
    "Highly recommend",
];

pub(crate) const REVIEW_TEXTS: &[&str] = &[
    "The quality is outstanding and it catches the light from every angle. I get compliments every time I wear it.",
    "Bought this as an anniversary gift and my wife hasn't taken it off since. Packaging was lovely too.",
    "Looks exactly like the photos, maybe even better. The setting feels secure and well made.",
    "Arrived quickly and beautifully boxed. The finish is flawless and it sits comfortably all day.",
    "I was nervous ordering jewelry online but this exceeded every expectation. Will be ordering again.",
    "Delicate without feeling fragile. It layers perfectly with my other pieces.",
    "The sizing guide was spot on and the fit is perfect. The stone has wonderful brilliance.",
    "Elegant enough for evenings out but subtle enough to wear to work every day.",
    "Customer service helped me choose the right size and the piece is gorgeous. Very happy.",
    "This is my third purchase from this store and the craftsmanship is consistently excellent.",
    "A true heirloom-quality piece. The detailing on the band is exquisite.",
    "Gave this to my daughter for her graduation and she was in tears. Beautiful work.",
    "Polished, sturdy clasp and a lovely weight to it. Feels far more expensive than it was.",
    "The color is rich and true to the listing. It hasn't tarnished at all after months of wear.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        assert!(!REVIEWER_NAMES.is_empty());
        assert!(!REVIEW_TITLES.is_empty());
        assert!(!REVIEW_TEXTS.is_empty());
    }
}
