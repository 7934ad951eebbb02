use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::display_surface::{DisplayError, DisplaySurface};
use crate::input::gui::events::GuiEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Latest frame and status handed from the controller thread to the UI thread.
///
/// Only the newest value is kept. A frame the UI never picked up is simply replaced.
#[derive(Debug, Default)]
pub struct FrameSlot {
    frame: Mutex<Option<FrameData>>,
    status: Mutex<Option<String>>,
    closed: AtomicBool,
}

impl FrameSlot {
    pub fn put_frame(&self, frame: FrameData) {
        *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.frame.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    pub fn put_status(&self, message: &str) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }

    pub fn take_status(&self) -> Option<String> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Display surface handed to the controller thread. Every update wakes the event loop.
pub struct PixelsAdapter {
    slot: FrameSlot,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            slot: FrameSlot::default(),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    #[must_use]
    pub fn slot(&self) -> &FrameSlot {
        &self.slot
    }

    pub fn notify(&self, event: GuiEvent) -> Result<(), DisplayError> {
        self.event_loop_proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send_event(event)
            .map_err(|_| DisplayError::Closed)
    }

    fn ensure_open(&self) -> Result<(), DisplayError> {
        if self.slot.is_closed() {
            return Err(DisplayError::Closed);
        }

        Ok(())
    }
}

impl DisplaySurface for Arc<PixelsAdapter> {
    fn present(&mut self, frame: FrameData) -> Result<(), DisplayError> {
        self.ensure_open()?;
        self.slot.put_frame(frame);
        self.notify(GuiEvent::Wake)
    }

    fn show_status(&mut self, message: &str) -> Result<(), DisplayError> {
        self.ensure_open()?;
        self.slot.put_status(message);
        self.notify(GuiEvent::Wake)
    }
}
