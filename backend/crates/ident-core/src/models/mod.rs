pub mod identity_claim;
pub mod login_request;
pub mod new_user;
pub mod public_user_view;
pub mod register_user;
pub mod responses;
pub mod severity;
pub mod user_changes;
pub mod user_id;
pub mod user_record;
pub mod user_update;
