/// Custom user events for the GUI event loop.
///
/// Sent from the controller thread to wake the main UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A new frame or status line may be waiting in the shared slot.
    ///
    /// Receiving this does not redraw by itself; the handler requests a redraw and the
    /// presenter picks up whatever is newest.
    Wake,
    /// The controller has terminated and nothing else will be presented.
    SessionEnded,
}
