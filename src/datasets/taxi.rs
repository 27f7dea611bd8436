use crate::schema::{Field, Schema};

pub const DEFAULT_DATAFILE: &str = "taxi.csv";
pub const DEFAULT_RECORDS: usize = 20_000_000;

pub const CAB_TYPES: &[&str] = &["green", "yellow"];

/// NYC taxi trip table. Bounds mirror the value ranges observed in the
/// public trips-plus-weather dataset.
pub fn schema() -> Schema {
    Schema::new(vec![
        Field::int("trip_id", 1, 1_464_785_771),
        Field::datetime("pickup_datetime", "2001-01-01 00:04:13", "2053-03-21 16:47:33"),
        Field::datetime("dropoff_datetime", "1900-01-01 00:00:00", "2253-08-23 07:56:38"),
        Field::int("rate_code_id", 0, 252),
        Field::float("pickup_longitude", -3509.015037, 3570.224107),
        Field::float("pickup_latitude", -3579.139413, 3577.13555),
        Field::float("dropoff_longitude", -3579.139413, 3460.426853),
        Field::float("dropoff_latitude", -3579.139413, 3577.135043),
        Field::int("passenger_count", 0, 255),
        Field::float("trip_distance", -40_840_124.4, 198_623_013.6),
        Field::float("fare_amount", -1430.0, 861_604.49),
        Field::float("extra", -79.0, 14000.0),
        Field::float("mta_tax", -49.5, 250.0),
        Field::float("tip_amount", -440.0, 3_950_588.8),
        Field::float("tolls_amount", -99.99, 7999.92),
        Field::float("improvement_surcharge", -0.3, 137.63),
        Field::float("total_amount", -1430.0, 3_950_611.6),
        Field::float("trip_type", 1.0, 2.0),
        Field::categorical("cab_type", CAB_TYPES),
        Field::float("precipitation", 0.0, 5.81),
        Field::int("snow_depth", 0, 23),
        Field::float("snowfall", 0.0, 27.3),
        Field::int("max_temperature", 15, 104),
        Field::int("min_temperature", -1, 84),
        Field::float("average_wind_speed", 0.22, 18.79),
        Field::float("pickup_nyct2010_gid", 1.0, 2167.0),
        Field::float("pickup_ctlabel", 1.0, 9901.0),
        Field::float("pickup_borocode", 1.0, 5.0),
        Field::float("pickup_ct2010", 100.0, 990_100.0),
        Field::float("pickup_boroct2010", 1_000_100.0, 5_990_100.0),
        Field::float("pickup_puma", 3701.0, 4114.0),
        Field::float("dropoff_nyct2010_gid", 1.0, 2167.0),
        Field::float("dropoff_ctlabel", 1.0, 9901.0),
        Field::float("dropoff_borocode", 1.0, 5.0),
        Field::float("dropoff_ct2010", 100.0, 990_100.0),
        Field::float("dropoff_boroct2010", 1_000_100.0, 5_990_100.0),
        Field::float("dropoff_puma", 3701.0, 4114.0),
    ])
}
