//! grocery-app - Presentation layer for Grocery
//!
//! View models and the UI event channel shared by Grocery front ends. All
//! mutations of externally observed collections travel through the channel
//! and are applied by its single consumer, the UI executor.

pub mod ui;
pub mod view_models;

pub use ui::{
    ui_channel, NavigationRequest, Toast, ToastKind, UiEvent, UiHandle, UiReceiver, UiState,
};
pub use view_models::GroceryListItemsViewModel;
