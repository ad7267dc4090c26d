pub mod checkout_session;
pub mod stripe_event;
pub mod stripe_subscription;
