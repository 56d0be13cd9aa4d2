
use bufete_test_utils::prelude::*;
use chrono::NaiveDate;

use crate::model::client::ClientParams;

use super::*;

fn client_params(dni: &str) -> ClientParams {
    ClientParams {
        dni: Some(dni.to_string()),
        full_name: Some("Andres Felipe".to_string()),
        address: Some("Calle 10 # 5-51".to_string()),
        nacionality: Some("Colombia".to_string()),
        birthdate: NaiveDate::from_ymd_opt(1985, 6, 15),
    }
}
