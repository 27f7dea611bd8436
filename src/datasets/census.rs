use crate::schema::{Field, Schema};

pub const DEFAULT_DATAFILE: &str = "census.csv";
pub const DEFAULT_RECORDS: usize = 21_721_923;

/// US census microdata table (IPUMS-style person records with
/// household-member companion columns).
pub fn schema() -> Schema {
    Schema::new(vec![
        Field::int("YEAR0", 1970, 2010),
        Field::int("DATANUM", 1, 4),
        Field::int("SERIAL", 1, 4_711_341),
        Field::float("CBSERIAL", 2.0, 1_414_542.0),
        Field::int("HHWT", 1, 1385),
        Field::float("CPI99", 0.764, 4.54),
        Field::int("GQ", 0, 5),
        Field::float("QGQ", 0.0, 5.0),
        Field::int("PERNUM", 1, 32),
        Field::int("PERWT", 1, 1385),
        Field::int("SEX", 1, 2),
        Field::int("AGE", 0, 100),
        Field::int("EDUC", 0, 11),
        Field::int("EDUCD", 0, 116),
        Field::int("INCTOT", -20000, 9_999_999),
        Field::float("SEX_HEAD", 1.0, 2.0),
        Field::float("SEX_MOM", 2.0, 2.0),
        Field::float("SEX_POP", 1.0, 1.0),
        Field::float("SEX_SP", 1.0, 2.0),
        Field::float("SEX_MOM2", 2.0, 2.0),
        Field::float("SEX_POP2", 1.0, 1.0),
        Field::float("AGE_HEAD", 14.0, 100.0),
        Field::float("AGE_MOM", 0.0, 100.0),
        Field::float("AGE_POP", 0.0, 100.0),
        Field::float("AGE_SP", 0.0, 100.0),
        Field::float("AGE_MOM2", 6.0, 94.0),
        Field::float("AGE_POP2", 1.0, 90.0),
        Field::float("EDUC_HEAD", 0.0, 11.0),
        Field::float("EDUC_MOM", 0.0, 11.0),
        Field::float("EDUC_POP", 0.0, 11.0),
        Field::float("EDUC_SP", 0.0, 11.0),
        Field::float("EDUC_MOM2", 0.0, 11.0),
        Field::float("EDUC_POP2", 0.0, 11.0),
        Field::float("EDUCD_HEAD", 2.0, 116.0),
        Field::float("EDUCD_MOM", 0.0, 116.0),
        Field::float("EDUCD_POP", 0.0, 116.0),
        Field::float("EDUCD_SP", 1.0, 116.0),
        Field::float("EDUCD_MOM2", 2.0, 116.0),
        Field::float("EDUCD_POP2", 1.0, 116.0),
        Field::float("INCTOT_HEAD", -20000.0, 9_999_999.0),
        Field::float("INCTOT_MOM", -19998.0, 9_999_999.0),
        Field::float("INCTOT_POP", -20000.0, 9_999_999.0),
        Field::float("INCTOT_SP", -20000.0, 9_999_999.0),
        Field::float("INCTOT_MOM2", -16.0, 9_999_999.0),
        Field::float("INCTOT_POP2", -10000.0, 9_999_999.0),
    ])
}
