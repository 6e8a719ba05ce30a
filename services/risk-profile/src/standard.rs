//! Built-in quiz configuration
//!
//! Ten questions on a 1-5 scale (totals 10-50), four risk bands with
//! thresholds at 15, 30 and 45, and the learning-map topic catalog.
//! All tables are validated by their constructors at startup.

use types::allocation::{AllocationTable, AssetClass};
use types::band::{BandTable, RiskBand, RiskLevel};
use types::errors::ConfigError;
use types::ids::{QuestionId, TopicId};
use types::questionnaire::{Question, Questionnaire};
use types::topic::{Topic, TopicCatalog};

/// Upper bound of the Conservative band (inclusive)
pub const CONSERVATIVE_MAX: u32 = 15;
/// Upper bound of the Balanced band (inclusive)
pub const BALANCED_MAX: u32 = 30;
/// Upper bound of the Aggressive band (inclusive)
pub const AGGRESSIVE_MAX: u32 = 45;

// 1 = lowest risk tolerance, 5 = highest
const QUESTION_PROMPTS: [&str; 10] = [
    "When do you expect to need most of the money you invest? (1 = within a year, 5 = more than ten years)",
    "How much investing experience do you have? (1 = none, 5 = many years across several asset classes)",
    "Your portfolio drops 20% in one month. What do you do? (1 = sell everything, 5 = buy more)",
    "How stable is your income over the next few years? (1 = very uncertain, 5 = very secure)",
    "How many months of expenses does your emergency fund cover? (1 = none, 5 = more than twelve)",
    "Which matters more to you? (1 = protecting what I have, 5 = maximising growth)",
    "How comfortable are you holding individual stocks instead of funds? (1 = not at all, 5 = completely)",
    "How small a share of your savings is this investment? (1 = nearly all of it, 5 = a small part)",
    "During a market downturn, how calm would you stay? (1 = I'd check daily and worry, 5 = I'd barely notice)",
    "How would you feel about a 30% gain one year followed by a 25% loss the next? (1 = unacceptable, 5 = a fair price for growth)",
];

const TOPIC_TITLES: [&str; 9] = [
    "Financial Markets Overview",
    "Stock Basics",
    "Stock Analysis and Strategy",
    "Bond Basics",
    "Bond Risk and Ratings",
    "Introduction to ETFs",
    "Asset Allocation Basics",
    "Dynamic Asset Allocation and Market Change",
    "Final Assessment",
];

pub fn questionnaire() -> Result<Questionnaire, ConfigError> {
    let questions = QUESTION_PROMPTS
        .iter()
        .zip(1u16..)
        .filter_map(|(prompt, n)| QuestionId::new(n).map(|id| Question::new(id, *prompt)))
        .collect();
    Questionnaire::new(questions)
}

pub fn bands() -> Result<BandTable, ConfigError> {
    BandTable::new(vec![
        RiskBand::new(
            RiskLevel::Conservative,
            "Conservative Explorer",
            "You put protecting your capital ahead of chasing returns and prefer a smooth ride.",
            "A bond-heavy mix limits drawdowns, while a small equity slice keeps some growth against inflation.",
            Some(CONSERVATIVE_MAX),
            AllocationTable::new(vec![
                (AssetClass::FixedIncome, 70),
                (AssetClass::Etf, 20),
                (AssetClass::Stocks, 10),
            ])?,
        ),
        RiskBand::new(
            RiskLevel::Balanced,
            "Balanced Explorer",
            "You accept moderate ups and downs in exchange for steady long-term growth.",
            "Bonds cushion volatility while diversified ETFs and stocks drive growth in roughly equal measure.",
            Some(BALANCED_MAX),
            AllocationTable::new(vec![
                (AssetClass::FixedIncome, 40),
                (AssetClass::Etf, 30),
                (AssetClass::Stocks, 30),
            ])?,
        ),
        RiskBand::new(
            RiskLevel::Aggressive,
            "Aggressive Explorer",
            "You are comfortable with sizeable swings and are investing for growth over a long horizon.",
            "An equity-led portfolio targets higher returns; ETFs add diversification and a small bond share dampens shocks.",
            Some(AGGRESSIVE_MAX),
            AllocationTable::new(vec![
                (AssetClass::Stocks, 70),
                (AssetClass::Etf, 20),
                (AssetClass::FixedIncome, 10),
            ])?,
        ),
        RiskBand::new(
            RiskLevel::Adventurous,
            "Adventurous Explorer",
            "You seek maximum growth and can ride out deep, prolonged losses without changing course.",
            "Nearly everything goes to stocks for the highest expected return, with a thin ETF layer for broad exposure.",
            None,
            AllocationTable::new(vec![
                (AssetClass::Stocks, 90),
                (AssetClass::Etf, 10),
            ])?,
        ),
    ])
}

pub fn topics() -> Result<TopicCatalog, ConfigError> {
    let topics = TOPIC_TITLES
        .iter()
        .zip(1u16..)
        .filter_map(|(title, n)| TopicId::new(n).map(|id| Topic::new(id, *title)))
        .collect();
    TopicCatalog::new(topics)
}
