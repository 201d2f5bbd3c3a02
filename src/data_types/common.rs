pub type ActivityId = i64;

pub trait Identifiable {
    fn as_i64(&self) -> ActivityId;
}
