use sqlvalid::{
    Messages, NativeType, SqlDataType, SqlValueValidator, generic_db_type, native_type,
    provider_db_type, sql_data_type,
};

fn main() {
    env_logger::init();

    let validator = SqlValueValidator::new();

    let samples = [
        (SqlDataType::Bit, "true"),
        (SqlDataType::TinyInt, "255"),
        (SqlDataType::SmallInt, "32767"),
        (SqlDataType::Int, "2147483647"),
        (SqlDataType::BigInt, "9223372036854775807"),
        (SqlDataType::SmallMoney, "214748.3647"),
        (SqlDataType::Money, "922337203685477.5807"),
        (SqlDataType::Decimal, "9999999999999999999999999999"),
        (SqlDataType::Float, "1.7976931348623157e308"),
        (SqlDataType::Real, "3.4028235e38"),
        (SqlDataType::SmallDateTime, "2079-01-06 15:45:00"),
        (SqlDataType::Date, "2025-01-17"),
        (SqlDataType::DateTime, "9999-01-06 15:45:00.999"),
        (SqlDataType::DateTime2, "9999-12-31 23:59:59.9999999"),
        (SqlDataType::Time, "23:59:59.9999999"),
        (SqlDataType::DateTimeOffset, "9999-12-31 23:59:59.9999999+03:00"),
        (SqlDataType::Char, "This is a Char value"),
        (SqlDataType::VarChar, "This is a VarChar value"),
        (SqlDataType::NChar, "This is an NChar value"),
        (SqlDataType::NVarChar, "This is an NVarChar value"),
        (SqlDataType::UniqueIdentifier, "dfe518e8-ba00-40cc-84dc-8fd52e072703"),
        (SqlDataType::Binary, "49 50 51 52 53 54 55 56 57"),
        (SqlDataType::VarBinary, "49 50 51 52 53 54 55 56 57"),
        (SqlDataType::Timestamp, "00000000000007D8"),
    ];
    for (data_type, value) in samples {
        let result = validator.validate(data_type, value);
        println!("{data_type}: {:?}, message: {}", result.value, result.message);
    }

    // The extended variants accept 1/0 bits and the full SQL decimal range.
    let bit = validator.validate_with(SqlDataType::Bit, "1", 0, true);
    println!("Bit (extended): {:?}, message: {}", bit.value, bit.message);
    let decimal = validator.validate_with(
        SqlDataType::Decimal,
        "99999999999999999999999999999999999999",
        0,
        true,
    );
    println!("Decimal (extended): {:?}, message: {}", decimal.value, decimal.message);

    // A failure reported through a localized catalog.
    let russian = SqlValueValidator::with_messages(Messages::russian());
    let out_of_range = russian.validate(SqlDataType::TinyInt, "256");
    println!("TinyInt: {:?}, message: {}", out_of_range.value, out_of_range.message);

    // Type mapping in the four directions.
    println!(
        "{} maps to {:?}",
        NativeType::UInt8,
        sql_data_type(NativeType::UInt8)
    );
    println!(
        "{} maps to provider type {}",
        SqlDataType::BigInt,
        provider_db_type(SqlDataType::BigInt)
    );
    println!(
        "{} maps to generic type {}",
        SqlDataType::Money,
        generic_db_type(SqlDataType::Money)
    );
    println!(
        "{} is read back as {}",
        SqlDataType::UniqueIdentifier,
        native_type(SqlDataType::UniqueIdentifier)
    );
}
