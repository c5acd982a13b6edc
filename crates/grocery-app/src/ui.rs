//! UI event channel and executor-side state.
//!
//! Front ends own a [`UiReceiver`] and apply events on their presentation
//! thread; view models hold a cloneable [`UiHandle`]. Collection mutations
//! arrive as whole events, so a consumer applying them in channel order never
//! observes a half-applied operation.

use tokio::sync::mpsc;

use grocery_core::models::{GroceryListId, GroceryListItem, Product, ProductId};

/// Kind of transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    /// Build a success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    /// Build an error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Navigation requested by a view model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Open the color/name editor for a list.
    EditListColor {
        list_id: GroceryListId,
        name: String,
    },
}

/// Event applied by the UI executor.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Replace the displayed grocery list items.
    ListItems(Vec<GroceryListItem>),
    /// Replace the displayed available products.
    DisplayedProducts(Vec<Product>),
    /// Remove a single product from the displayed set.
    RemoveDisplayedProduct(ProductId),
    /// Show a transient notification.
    Toast(Toast),
    /// Navigate to another screen.
    Navigate(NavigationRequest),
}

/// Sending half handed to view models.
#[derive(Clone)]
pub struct UiHandle {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl UiHandle {
    /// Queue an event for the UI executor.
    ///
    /// Events sent after the executor is gone are dropped.
    pub fn dispatch(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}

/// Receiving half owned by the single UI executor.
pub struct UiReceiver {
    rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl UiReceiver {
    /// Wait for the next event.
    pub async fn recv(&mut self) -> Option<UiEvent> {
        self.rx.recv().await
    }

    /// Drain every event queued so far, in send order.
    pub fn drain(&mut self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Create the channel pair connecting view models to the UI executor.
#[must_use]
pub fn ui_channel() -> (UiHandle, UiReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiHandle { tx }, UiReceiver { rx })
}

/// Observed collections as the UI executor sees them.
#[derive(Debug, Default)]
pub struct UiState {
    /// Items on the selected list.
    pub items: Vec<GroceryListItem>,
    /// Available products after search filtering.
    pub displayed_products: Vec<Product>,
    /// Notifications shown so far.
    pub toasts: Vec<Toast>,
    /// Navigation requests received so far.
    pub navigations: Vec<NavigationRequest>,
}

impl UiState {
    /// Apply a single event.
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::ListItems(items) => self.items = items,
            UiEvent::DisplayedProducts(products) => self.displayed_products = products,
            UiEvent::RemoveDisplayedProduct(product_id) => {
                self.displayed_products
                    .retain(|product| product.id != product_id);
            }
            UiEvent::Toast(toast) => self.toasts.push(toast),
            UiEvent::Navigate(request) => self.navigations.push(request),
        }
    }

    /// Apply every event queued on the receiver, in channel order.
    pub fn apply_all(&mut self, receiver: &mut UiReceiver) {
        for event in receiver.drain() {
            self.apply(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_send_order() {
        let (handle, mut receiver) = ui_channel();
        handle.dispatch(UiEvent::Toast(Toast::success("one")));
        handle.dispatch(UiEvent::Toast(Toast::error("two")));

        let events = receiver.drain();
        assert_eq!(
            events,
            vec![
                UiEvent::Toast(Toast::success("one")),
                UiEvent::Toast(Toast::error("two")),
            ]
        );
    }

    #[test]
    fn remove_event_drops_only_the_matching_product() {
        let milk = Product::new("Milk", 3);
        let bread = Product::new("Bread", 5);
        let mut state = UiState::default();

        state.apply(UiEvent::DisplayedProducts(vec![milk.clone(), bread.clone()]));
        state.apply(UiEvent::RemoveDisplayedProduct(milk.id));

        assert_eq!(state.displayed_products, vec![bread]);
    }

    #[test]
    fn dispatch_after_receiver_dropped_is_ignored() {
        let (handle, receiver) = ui_channel();
        drop(receiver);

        handle.dispatch(UiEvent::Toast(Toast::success("late")));
    }
}
