pub mod price_record;
