use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::models::{to_card_dtos, CardDto, DeckDto, DeckSummaryDto, HealthDto};
use crate::api::AppState;

#[derive(Debug, Deserialize)]
pub(super) struct CreateDeckParams {
    shuffle: Option<String>,
    cards: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DrawParams {
    amount: Option<String>,
}

pub(super) async fn welcome() -> &'static str {
    "Hello, this is the Cards Game API"
}

pub(super) async fn healthz(State(state): State<AppState>) -> Json<HealthDto> {
    Json(HealthDto {
        ok: true,
        decks: state.service.deck_count(),
    })
}

/// `POST /deck?shuffle=true&cards=AS,KD`
pub(super) async fn create_deck(
    State(state): State<AppState>,
    Query(params): Query<CreateDeckParams>,
) -> ApiResult<(StatusCode, Json<DeckSummaryDto>)> {
    let shuffle = params
        .shuffle
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case("true"));
    let codes = parse_codes(params.cards.as_deref());
    debug!("create_deck: shuffle={}, codes={:?}", shuffle, codes);

    let deck = state.service.create_deck(shuffle, &codes)?;
    Ok((StatusCode::CREATED, Json(DeckSummaryDto::from(&deck))))
}

/// `GET /deck/:uuid`
pub(super) async fn open_deck(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<DeckDto>> {
    let id = parse_deck_id(&raw_id)?;
    let deck = state.service.open_deck(id)?;
    Ok(Json(DeckDto::from(&deck)))
}

/// `GET /deck/:uuid/cards?amount=N`
pub(super) async fn draw_cards(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<DrawParams>,
) -> ApiResult<Json<Vec<CardDto>>> {
    let id = parse_deck_id(&raw_id)?;
    let amount = match params.amount.as_deref().map(str::trim) {
        None | Some("") => state.default_draw_amount,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ApiError::BadRequest(format!("invalid amount: {raw}")))?,
    };

    let cards = state.service.draw_cards(id, amount)?;
    Ok(Json(to_card_dtos(&cards)))
}

fn parse_deck_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("invalid deck id: {raw}")))
}

/// Upper-case and split a comma-separated code list.
/// Only a missing or empty parameter means "no codes"; blank or padded
/// segments are passed on and fail code resolution.
fn parse_codes(raw: Option<&str>) -> Vec<String> {
    match raw {
        None | Some("") => Vec::new(),
        Some(s) => s.to_uppercase().split(',').map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert!(parse_codes(None).is_empty());
        assert!(parse_codes(Some("")).is_empty());
        assert_eq!(parse_codes(Some("sa,kd")), vec!["SA", "KD"]);
        assert_eq!(parse_codes(Some(",")), vec!["", ""]);
        assert_eq!(parse_codes(Some("SA,,H8")), vec!["SA", "", "H8"]);
        assert_eq!(parse_codes(Some("SA, kd")), vec!["SA", " KD"]);
    }

    #[test]
    fn given_malformed_id_when_parsing_then_bad_request() {
        assert!(matches!(
            parse_deck_id("not-a-uuid"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
