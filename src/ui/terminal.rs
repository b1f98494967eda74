/// Runs a cleanup closure when dropped, including on early `?` returns.
///
/// The terminal UI arms one right after entering raw mode so a failed
/// setup step or a failed game loop still hands back a usable terminal.
pub struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreOnDrop<F> {
    pub fn new(restore: F) -> Self {
        RestoreOnDrop { restore }
    }
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}
