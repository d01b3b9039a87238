#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedType {
    Nursing,
    Pumped,
}

impl FeedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::Nursing => "nursing",
            FeedType::Pumped => "pumped",
        }
    }
}
