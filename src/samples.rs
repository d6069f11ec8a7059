//! Reference texts: the labeled set used for self-evaluation and a small demo batch.

use crate::sentiment::SentimentLabel;
use crate::sentiment::SentimentLabel::{Negative, Neutral, Positive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledSample {
    pub text: &'static str,
    pub actual: SentimentLabel,
}

const fn sample(text: &'static str, actual: SentimentLabel) -> LabeledSample {
    LabeledSample { text, actual }
}

pub const LABELED_SAMPLES: &[LabeledSample] = &[
    sample("I absolutely love this product! Best purchase ever.", Positive),
    sample("Terrible experience. Would never recommend to anyone.", Negative),
    sample("The product is okay, nothing special.", Neutral),
    sample("Amazing customer service! They went above and beyond.", Positive),
    sample("Waste of money. Completely disappointed.", Negative),
    sample("It works as expected. Standard quality.", Neutral),
    sample("This exceeded all my expectations! Fantastic!", Positive),
    sample("Horrible quality. Broke after one day.", Negative),
    sample("Average product at an average price.", Neutral),
    sample("I'm so happy with this purchase. Highly recommend!", Positive),
    sample("Don't buy this. Total scam.", Negative),
    sample("It's fine for what it is.", Neutral),
    sample("Excellent quality and fast shipping!", Positive),
    sample("Arrived damaged and customer service was rude.", Negative),
    sample("Does the job. Nothing more, nothing less.", Neutral),
    sample("Best decision I ever made. Love it!", Positive),
    sample("Completely useless. Want my money back.", Negative),
    sample("Acceptable quality for the price.", Neutral),
    sample("Outstanding product! Will buy again.", Positive),
    sample("Very disappointing experience overall.", Negative),
    sample("Meets basic requirements.", Neutral),
    sample("I'm extremely satisfied with everything!", Positive),
    sample("Worst purchase ever. Avoid at all costs.", Negative),
    sample("Standard product, standard experience.", Neutral),
    sample("Perfect in every way. Couldn't be happier!", Positive),
    sample("Failed to work properly. Very frustrated.", Negative),
    sample("It's adequate for everyday use.", Neutral),
    sample("Wonderful experience from start to finish!", Positive),
    sample("Terrible quality and overpriced.", Negative),
    sample("Fair value for money.", Neutral),
    sample("This made my day! Absolutely brilliant!", Positive),
    sample("Complete waste of time and money.", Negative),
    sample("Regular product, works normally.", Neutral),
    sample("Exceptional service and quality!", Positive),
    sample("Never buying from here again. Awful.", Negative),
    sample("It's okay, does what it says.", Neutral),
    sample("I recommend this to everyone!", Positive),
    sample("Extremely poor quality. Very angry.", Negative),
    sample("Moderate quality at a moderate price.", Neutral),
    sample("Delighted with my purchase! Thank you!", Positive),
    sample("This is a disaster. Avoid.", Negative),
    sample("Basic functionality works fine.", Neutral),
    sample("Amazing! Beyond my expectations!", Positive),
    sample("Regret buying this. Very unhappy.", Negative),
    sample("Standard quality for the category.", Neutral),
    sample("Superb quality and great value!", Positive),
    sample("Broken on arrival. Terrible.", Negative),
    sample("Normal everyday product.", Neutral),
    sample("I'm impressed! Great job!", Positive),
    sample("Cheap and useless. Don't bother.", Negative),
];

pub const DEMO_REVIEWS: &[&str] = &[
    "I absolutely love this product! Best purchase I've ever made.",
    "Terrible customer service. Waited for hours with no resolution.",
    "The product is okay, nothing special but gets the job done.",
    "Amazing experience! Will definitely recommend to friends.",
    "Very disappointed with the quality. Not worth the price.",
    "Fast shipping and exactly as described. Happy customer here!",
    "The app crashes constantly. Very frustrating user experience.",
    "Good value for money. Meets expectations.",
    "Outstanding support team! They went above and beyond.",
    "Wouldn't recommend. Poor packaging and arrived damaged.",
];

pub const DEMO_BATCH_NAME: &str = "Sample Reviews";
