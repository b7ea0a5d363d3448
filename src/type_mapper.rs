use crate::SqlDataType;
use std::fmt::{self, Display, Formatter};

/// Host-side representation of a column value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeType {
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Date,
    Time,
    DateTime,
    DateTimeOffset,
    Duration,
    String,
    Uuid,
    Bytes,
}

/// Parameter type names as the SQL Server provider spells them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderDbType {
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

/// Provider independent parameter types, the common denominator a generic
/// data access layer speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericDbType {
    Boolean,
    Byte,
    Int16,
    Int32,
    Int64,
    Currency,
    Decimal,
    Double,
    Single,
    DateTime,
    DateTime2,
    DateTimeOffset,
    Time,
    Date,
    AnsiStringFixedLength,
    AnsiString,
    StringFixedLength,
    String,
    Guid,
    Binary,
}

impl Display for NativeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NativeType::Bool => "bool",
            NativeType::Int8 => "i8",
            NativeType::UInt8 => "u8",
            NativeType::Int16 => "i16",
            NativeType::UInt16 => "u16",
            NativeType::Int32 => "i32",
            NativeType::UInt32 => "u32",
            NativeType::Int64 => "i64",
            NativeType::UInt64 => "u64",
            NativeType::Float32 => "f32",
            NativeType::Float64 => "f64",
            NativeType::Decimal => "Decimal",
            NativeType::Date => "Date",
            NativeType::Time => "Time",
            NativeType::DateTime => "PrimitiveDateTime",
            NativeType::DateTimeOffset => "OffsetDateTime",
            NativeType::Duration => "Duration",
            NativeType::String => "String",
            NativeType::Uuid => "Uuid",
            NativeType::Bytes => "Vec<u8>",
        })
    }
}

impl Display for ProviderDbType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Display for GenericDbType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The SQL data type a value of `native` maps to, `None` when the host type
/// has no direct SQL Server counterpart (signed bytes and the unsigned widths
/// above u8).
pub fn sql_data_type(native: NativeType) -> Option<SqlDataType> {
    match native {
        NativeType::Bool => Some(SqlDataType::Bit),
        NativeType::UInt8 => Some(SqlDataType::TinyInt),
        NativeType::Int16 => Some(SqlDataType::SmallInt),
        NativeType::Int32 => Some(SqlDataType::Int),
        NativeType::Int64 => Some(SqlDataType::BigInt),
        NativeType::Float32 => Some(SqlDataType::Real),
        NativeType::Float64 => Some(SqlDataType::Float),
        NativeType::Decimal => Some(SqlDataType::Decimal),
        NativeType::Date => Some(SqlDataType::Date),
        NativeType::Time | NativeType::Duration => Some(SqlDataType::Time),
        NativeType::DateTime => Some(SqlDataType::DateTime2),
        NativeType::DateTimeOffset => Some(SqlDataType::DateTimeOffset),
        NativeType::String => Some(SqlDataType::NVarChar),
        NativeType::Uuid => Some(SqlDataType::UniqueIdentifier),
        NativeType::Bytes => Some(SqlDataType::VarBinary),
        NativeType::Int8 | NativeType::UInt16 | NativeType::UInt32 | NativeType::UInt64 => None,
    }
}

/// The provider parameter type for a SQL data type. Total, the two sets
/// mirror each other.
pub fn provider_db_type(data_type: SqlDataType) -> ProviderDbType {
    match data_type {
        SqlDataType::Bit => ProviderDbType::Bit,
        SqlDataType::TinyInt => ProviderDbType::TinyInt,
        SqlDataType::SmallInt => ProviderDbType::SmallInt,
        SqlDataType::Int => ProviderDbType::Int,
        SqlDataType::BigInt => ProviderDbType::BigInt,
        SqlDataType::SmallMoney => ProviderDbType::SmallMoney,
        SqlDataType::Money => ProviderDbType::Money,
        SqlDataType::Decimal => ProviderDbType::Decimal,
        SqlDataType::Float => ProviderDbType::Float,
        SqlDataType::Real => ProviderDbType::Real,
        SqlDataType::SmallDateTime => ProviderDbType::SmallDateTime,
        SqlDataType::Date => ProviderDbType::Date,
        SqlDataType::DateTime => ProviderDbType::DateTime,
        SqlDataType::DateTime2 => ProviderDbType::DateTime2,
        SqlDataType::Time => ProviderDbType::Time,
        SqlDataType::DateTimeOffset => ProviderDbType::DateTimeOffset,
        SqlDataType::Char => ProviderDbType::Char,
        SqlDataType::VarChar => ProviderDbType::VarChar,
        SqlDataType::NChar => ProviderDbType::NChar,
        SqlDataType::NVarChar => ProviderDbType::NVarChar,
        SqlDataType::UniqueIdentifier => ProviderDbType::UniqueIdentifier,
        SqlDataType::Binary => ProviderDbType::Binary,
        SqlDataType::VarBinary => ProviderDbType::VarBinary,
        SqlDataType::Timestamp => ProviderDbType::Timestamp,
    }
}

/// The generic parameter type for a SQL data type. Lossy: the money, string
/// and binary families collapse onto their generic umbrella.
pub fn generic_db_type(data_type: SqlDataType) -> GenericDbType {
    match data_type {
        SqlDataType::Bit => GenericDbType::Boolean,
        SqlDataType::TinyInt => GenericDbType::Byte,
        SqlDataType::SmallInt => GenericDbType::Int16,
        SqlDataType::Int => GenericDbType::Int32,
        SqlDataType::BigInt => GenericDbType::Int64,
        SqlDataType::SmallMoney | SqlDataType::Money => GenericDbType::Currency,
        SqlDataType::Decimal => GenericDbType::Decimal,
        SqlDataType::Float => GenericDbType::Double,
        SqlDataType::Real => GenericDbType::Single,
        SqlDataType::SmallDateTime | SqlDataType::DateTime => GenericDbType::DateTime,
        SqlDataType::Date => GenericDbType::Date,
        SqlDataType::DateTime2 => GenericDbType::DateTime2,
        SqlDataType::Time => GenericDbType::Time,
        SqlDataType::DateTimeOffset => GenericDbType::DateTimeOffset,
        SqlDataType::Char => GenericDbType::AnsiStringFixedLength,
        SqlDataType::VarChar => GenericDbType::AnsiString,
        SqlDataType::NChar => GenericDbType::StringFixedLength,
        SqlDataType::NVarChar => GenericDbType::String,
        SqlDataType::UniqueIdentifier => GenericDbType::Guid,
        SqlDataType::Binary | SqlDataType::VarBinary | SqlDataType::Timestamp => {
            GenericDbType::Binary
        }
    }
}

/// The host type a column of `data_type` is read back into. Lossy in the
/// other direction: the string family all land on [`NativeType::String`],
/// the binary family on [`NativeType::Bytes`].
pub fn native_type(data_type: SqlDataType) -> NativeType {
    match data_type {
        SqlDataType::Bit => NativeType::Bool,
        SqlDataType::TinyInt => NativeType::UInt8,
        SqlDataType::SmallInt => NativeType::Int16,
        SqlDataType::Int => NativeType::Int32,
        SqlDataType::BigInt => NativeType::Int64,
        SqlDataType::SmallMoney | SqlDataType::Money | SqlDataType::Decimal => NativeType::Decimal,
        SqlDataType::Float => NativeType::Float64,
        SqlDataType::Real => NativeType::Float32,
        SqlDataType::SmallDateTime | SqlDataType::DateTime | SqlDataType::DateTime2 => {
            NativeType::DateTime
        }
        SqlDataType::Date => NativeType::Date,
        SqlDataType::Time => NativeType::Duration,
        SqlDataType::DateTimeOffset => NativeType::DateTimeOffset,
        SqlDataType::Char | SqlDataType::VarChar | SqlDataType::NChar | SqlDataType::NVarChar => {
            NativeType::String
        }
        SqlDataType::UniqueIdentifier => NativeType::Uuid,
        SqlDataType::Binary | SqlDataType::VarBinary | SqlDataType::Timestamp => NativeType::Bytes,
    }
}
