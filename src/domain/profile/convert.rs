//! Conversion: CompanyProfileResponse → CompanyProfile (TryFrom + validation).

use super::wire;
use super::{CompanyProfile, ValidationError};
use crate::shared::Symbol;
use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

fn decimal_field(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: Option<f64>,
) -> Option<Decimal> {
    let value = value?;
    match Decimal::from_f64(value) {
        Some(d) => Some(d),
        None => {
            errors.push(ValidationError::InvalidNumber { field, value });
            None
        }
    }
}

impl TryFrom<wire::CompanyProfileResponse> for CompanyProfile {
    type Error = ValidationError;

    fn try_from(source: wire::CompanyProfileResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let symbol = source.symbol.clone().unwrap_or_else(|| {
            errors.push(ValidationError::MissingField("symbol"));
            String::new()
        });
        let company_name = source.company_name.clone().unwrap_or_else(|| {
            errors.push(ValidationError::MissingField("companyName"));
            String::new()
        });

        let price = decimal_field(&mut errors, "price", source.price);
        let beta = decimal_field(&mut errors, "beta", source.beta);
        let last_dividend = decimal_field(&mut errors, "lastDiv", source.last_div);

        // The provider sends "" instead of omitting an unknown IPO date.
        let ipo_date = match source.ipo_date.as_deref() {
            None | Some("") => None,
            Some(s) => match s.parse::<NaiveDate>() {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(ValidationError::InvalidDate {
                        field: "ipoDate",
                        value: s.to_string(),
                    });
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(errors));
        }

        Ok(CompanyProfile {
            symbol: Symbol::from(symbol),
            company_name,
            price,
            currency: source.currency,
            exchange: source.exchange,
            industry: source.industry,
            sector: source.sector,
            website: source.website,
            description: source.description,
            ceo: source.ceo,
            full_time_employees: source.full_time_employees,
            phone: source.phone,
            address: source.address,
            city: source.city,
            state: source.state,
            zip: source.zip,
            country: source.country,
            ipo_date,
            avg_volume: source.vol_avg,
            market_cap: source.mkt_cap.map(Decimal::from),
            range_52w: source.range,
            beta,
            last_dividend,
        })
    }
}

/// Pick the profile out of the provider's array response. An empty array
/// means the symbol has no profile, which is not an error.
pub fn first_profile(
    mut profiles: Vec<wire::CompanyProfileResponse>,
) -> Result<Option<CompanyProfile>, ValidationError> {
    if profiles.is_empty() {
        return Ok(None);
    }
    profiles.remove(0).try_into().map(Some)
}
