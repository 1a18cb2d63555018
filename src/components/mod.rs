pub mod header;
pub mod listings_list;
pub mod login_form;
pub mod place_summary;
pub mod review_form;
pub mod reviews_list;
