mod user_id;
mod user_record;
