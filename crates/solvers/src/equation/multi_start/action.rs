/// Control actions supported by the multi-start scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Skip the remaining seeds and return the roots accepted so far.
    StopEarly,
}
