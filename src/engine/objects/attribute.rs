use super::ValueKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub kind: ValueKind,
}

impl Attribute {
    pub fn new(name: String, kind: ValueKind) -> Attribute {
        Attribute { name, kind }
    }
}
