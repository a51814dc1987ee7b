use std::fmt;
use std::sync::Arc;

pub mod arrow;

/// One entry of a student's preference list.
///
/// `rank` is the 1-based position inside the owning student's list. The city and
/// speciality identifiers are shared with the service catalogue the request was
/// drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentRequest {
    rank: usize,
    speciality: Arc<str>,
    city: Arc<str>,
}

impl AssignmentRequest {
    pub fn new(rank: usize, speciality: impl Into<Arc<str>>, city: impl Into<Arc<str>>) -> Self {
        Self {
            rank,
            speciality: speciality.into(),
            city: city.into(),
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn speciality(&self) -> &str {
        &self.speciality
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for AssignmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Request #{}: {} at {}",
            self.rank, self.speciality, self.city
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Student {
    rank: usize,
    requests: Vec<AssignmentRequest>,
}

impl Student {
    /// Population rank, starting at 1.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn requests(&self) -> &[AssignmentRequest] {
        &self.requests
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student #{}: [", self.rank)?;
        for (i, request) in self.requests.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}@{}", request.speciality, request.city)?;
        }
        f.write_str("]")
    }
}

#[must_use]
pub struct StudentBuilder {
    rank: usize,
    requests: Vec<AssignmentRequest>,
}

impl StudentBuilder {
    pub fn new(rank: usize) -> Self {
        Self {
            rank,
            requests: Vec::new(),
        }
    }

    pub fn with_request(mut self, request: AssignmentRequest) -> Self {
        self.requests.push(request);
        self
    }

    pub fn with_requests<I>(mut self, requests: I) -> Self
    where
        I: IntoIterator<Item = AssignmentRequest>,
    {
        self.requests.extend(requests);
        self
    }

    #[must_use]
    pub fn build(self) -> Student {
        Student {
            rank: self.rank,
            requests: self.requests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_request_order() {
        let student = StudentBuilder::new(7)
            .with_request(AssignmentRequest::new(1, "SUR", "Paris"))
            .with_requests([
                AssignmentRequest::new(2, "PED", "Lyon"),
                AssignmentRequest::new(3, "SUR", "Paris"),
            ])
            .build();

        assert_eq!(student.rank(), 7);
        let ranks = student.requests().iter().map(|r| r.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(student.requests()[1].speciality(), "PED");
        assert_eq!(student.requests()[1].city(), "Lyon");
    }

    #[test]
    fn test_display() {
        let request = AssignmentRequest::new(1, "SUR", "Paris");
        assert_eq!(request.to_string(), "Request #1: SUR at Paris");

        let student = StudentBuilder::new(2)
            .with_request(request)
            .with_request(AssignmentRequest::new(2, "PED", "Lyon"))
            .build();
        assert_eq!(student.to_string(), "Student #2: [SUR@Paris, PED@Lyon]");
    }
}
