use super::Student;
use arrow::array::{RecordBatch, StringDictionaryBuilder, UInt32Builder};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef, UInt16Type};
use arrow::error::ArrowError;
use std::sync::Arc;

pub const STUDENT_RANK_FIELD_INDEX: usize = 0;
pub const REQUEST_RANK_FIELD_INDEX: usize = 1;
pub const SPEC_ID_FIELD_INDEX: usize = 2;
pub const CITY_ID_FIELD_INDEX: usize = 3;

fn build_request_fields() -> Vec<Arc<Field>> {
    let dictionary = DataType::Dictionary(Box::new(DataType::UInt16), Box::new(DataType::Utf8));

    vec![
        Arc::from(Field::new("student_rank", DataType::UInt32, false)),
        Arc::from(Field::new("request_rank", DataType::UInt32, false)),
        Arc::from(Field::new("spec_id", dictionary.clone(), false)),
        Arc::from(Field::new("city_id", dictionary, false)),
    ]
}

/// Flat layout of a generated population: one row per assignment request.
pub fn get_request_schema() -> SchemaRef {
    Arc::new(Schema::new(build_request_fields()))
}

fn to_u32(value: usize, column: &str) -> Result<u32, ArrowError> {
    u32::try_from(value).map_err(|_| {
        ArrowError::InvalidArgumentError(format!("{column} value {value} does not fit in UInt32"))
    })
}

/// Flattens students into rows ordered by student rank, then request rank.
///
/// The input order is preserved as-is, callers are expected to pass students
/// already sorted by rank.
pub fn create_record_batch(
    schema: SchemaRef,
    students: &[Student],
) -> Result<RecordBatch, ArrowError> {
    let num_rows = students.iter().map(|s| s.requests().len()).sum::<usize>();

    let mut student_rank_builder = UInt32Builder::with_capacity(num_rows);
    let mut request_rank_builder = UInt32Builder::with_capacity(num_rows);
    let mut spec_id_builder = StringDictionaryBuilder::<UInt16Type>::new();
    let mut city_id_builder = StringDictionaryBuilder::<UInt16Type>::new();

    for student in students {
        let student_rank = to_u32(student.rank(), "student_rank")?;

        for request in student.requests() {
            student_rank_builder.append_value(student_rank);
            request_rank_builder.append_value(to_u32(request.rank(), "request_rank")?);
            spec_id_builder.append(request.speciality())?;
            city_id_builder.append(request.city())?;
        }
    }

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(student_rank_builder.finish()),
            Arc::new(request_rank_builder.finish()),
            Arc::new(spec_id_builder.finish()),
            Arc::new(city_id_builder.finish()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{AssignmentRequest, StudentBuilder};
    use arrow::array::{Array, AsArray};
    use arrow::datatypes::UInt32Type;

    fn students() -> Vec<Student> {
        vec![
            StudentBuilder::new(1)
                .with_request(AssignmentRequest::new(1, "SUR", "Paris"))
                .with_request(AssignmentRequest::new(2, "PED", "Lyon"))
                .build(),
            StudentBuilder::new(2)
                .with_request(AssignmentRequest::new(1, "PED", "Paris"))
                .with_request(AssignmentRequest::new(2, "PED", "Paris"))
                .build(),
        ]
    }

    #[test]
    fn test_create_record_batch_flattens_requests() {
        let schema = get_request_schema();
        let batch = create_record_batch(schema.clone(), &students()).unwrap();

        assert_eq!(batch.num_rows(), 4);
        assert_eq!(batch.schema(), schema);

        let student_ranks = batch
            .column(STUDENT_RANK_FIELD_INDEX)
            .as_primitive::<UInt32Type>()
            .values()
            .to_vec();
        assert_eq!(student_ranks, vec![1, 1, 2, 2]);

        let request_ranks = batch
            .column(REQUEST_RANK_FIELD_INDEX)
            .as_primitive::<UInt32Type>()
            .values()
            .to_vec();
        assert_eq!(request_ranks, vec![1, 2, 1, 2]);

        let spec_ids = batch
            .column(SPEC_ID_FIELD_INDEX)
            .as_dictionary::<UInt16Type>();
        let spec_values = spec_ids.values().as_string::<i32>();
        let specs = spec_ids
            .keys()
            .values()
            .iter()
            .map(|&k| spec_values.value(k as usize))
            .collect::<Vec<_>>();
        assert_eq!(specs, vec!["SUR", "PED", "PED", "PED"]);

        // Dictionary encoding keeps one entry per distinct city.
        let city_ids = batch.column(CITY_ID_FIELD_INDEX).as_dictionary::<UInt16Type>();
        assert_eq!(city_ids.values().len(), 2);
    }

    #[test]
    fn test_create_record_batch_empty() {
        let batch = create_record_batch(get_request_schema(), &[]).unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 4);
    }
}
