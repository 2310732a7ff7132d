use super::AppMode;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageModalState {
    pub source: String,
    pub alt: String,
    pub return_mode: AppMode,
}
