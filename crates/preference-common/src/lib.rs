pub mod request;

pub mod prelude {
    pub use super::request::AssignmentRequest;
    pub use super::request::Student;
    pub use super::request::StudentBuilder;
    pub use super::request::arrow::CITY_ID_FIELD_INDEX;
    pub use super::request::arrow::REQUEST_RANK_FIELD_INDEX;
    pub use super::request::arrow::SPEC_ID_FIELD_INDEX;
    pub use super::request::arrow::STUDENT_RANK_FIELD_INDEX;
    pub use super::request::arrow::create_record_batch;
    pub use super::request::arrow::get_request_schema;
}
