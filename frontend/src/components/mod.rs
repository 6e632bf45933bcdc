pub mod privacy_modal;
