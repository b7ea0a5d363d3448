use std::fmt::{self, Display, Formatter};

/// Logical SQL column types supported by the validation and mapping surface.
///
/// Legacy types (`Image`, `Text`, `NText`) and non-scalar ones (`Variant`,
/// `Xml`, `Udt`, `Structured`) are intentionally absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlDataType {
    Bit,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    SmallMoney,
    Money,
    Decimal,
    Float,
    Real,
    SmallDateTime,
    Date,
    DateTime,
    DateTime2,
    Time,
    DateTimeOffset,
    Char,
    VarChar,
    NChar,
    NVarChar,
    UniqueIdentifier,
    Binary,
    VarBinary,
    Timestamp,
}

impl SqlDataType {
    pub const ALL: [SqlDataType; 24] = [
        Self::Bit,
        Self::TinyInt,
        Self::SmallInt,
        Self::Int,
        Self::BigInt,
        Self::SmallMoney,
        Self::Money,
        Self::Decimal,
        Self::Float,
        Self::Real,
        Self::SmallDateTime,
        Self::Date,
        Self::DateTime,
        Self::DateTime2,
        Self::Time,
        Self::DateTimeOffset,
        Self::Char,
        Self::VarChar,
        Self::NChar,
        Self::NVarChar,
        Self::UniqueIdentifier,
        Self::Binary,
        Self::VarBinary,
        Self::Timestamp,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bit => "Bit",
            Self::TinyInt => "TinyInt",
            Self::SmallInt => "SmallInt",
            Self::Int => "Int",
            Self::BigInt => "BigInt",
            Self::SmallMoney => "SmallMoney",
            Self::Money => "Money",
            Self::Decimal => "Decimal",
            Self::Float => "Float",
            Self::Real => "Real",
            Self::SmallDateTime => "SmallDateTime",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::DateTime2 => "DateTime2",
            Self::Time => "Time",
            Self::DateTimeOffset => "DateTimeOffset",
            Self::Char => "Char",
            Self::VarChar => "VarChar",
            Self::NChar => "NChar",
            Self::NVarChar => "NVarChar",
            Self::UniqueIdentifier => "UniqueIdentifier",
            Self::Binary => "Binary",
            Self::VarBinary => "VarBinary",
            Self::Timestamp => "Timestamp",
        }
    }
}

impl Display for SqlDataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
