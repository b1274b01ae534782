/// Compiler hints to prioritize branches over others and improve branch prediction.
pub(crate) mod branch_prediction {
    #[cold]
    const fn cold_line() {}

    /// Hints to the compiler that branch `condition` is likely to be false.
    /// Returns the value passed to it.
    #[inline(always)]
    pub(crate) const fn unlikely(condition: bool) -> bool {
        if condition {
            cold_line();
            true
        } else {
            false
        }
    }
}
