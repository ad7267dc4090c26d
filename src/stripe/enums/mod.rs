pub mod checkout_mode;
pub mod stripe_event_type;
