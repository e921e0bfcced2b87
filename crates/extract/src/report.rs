/// Outcome of a per-item pipeline stage: the items that made it through and
/// the ones that were skipped, with the reason. One bad item never fails the
/// stage.
#[derive(Debug)]
pub struct StageReport<T> {
    pub items: Vec<T>,
    pub skipped: Vec<Skip>,
}

#[derive(Debug)]
pub struct Skip {
    pub index: usize,
    pub reason: String,
}

impl<T> Default for StageReport<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: Vec::new(),
        }
    }
}
