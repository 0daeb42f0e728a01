use crate::domain::model::LineEnding;

/// Settings the transformer and logger read, whatever their source.
pub trait ConfigProvider {
    fn line_ending(&self) -> LineEnding;
    fn log_filter(&self) -> Option<&str>;
}
