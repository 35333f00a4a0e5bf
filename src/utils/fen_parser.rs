//! FEN splitting into positional fields.
//!
//! Only the structure of the record is checked here: eight rank strings and
//! the side, castling, en-passant and counter tokens. Interpreting those
//! tokens (piece letters, rook files, legality) is `Board::from_fields`'s job.
//! The two counters are optional and default to `0` and `1`, since EPD-style
//! test positions commonly omit them.

use crate::chess_errors::ChessErrors;

/// The six FEN fields, with the board layout already split into ranks.
///
/// `ranks[0]` is rank 8, as written in the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionFields {
    pub ranks: [String; 8],
    pub side_to_move: String,
    pub castling: String,
    pub en_passant: String,
    pub halfmove: String,
    pub fullmove: String,
}

pub fn parse_fen_fields(fen: &str) -> Result<PositionFields, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing side to move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing castling rights".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing en passant square".to_owned()))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFenString(
            "trailing fields after fullmove number".to_owned(),
        ));
    }

    let split: Vec<&str> = board_part.split('/').collect();
    if split.len() != 8 {
        return Err(ChessErrors::InvalidFenString(format!(
            "board layout has {} ranks",
            split.len()
        )));
    }
    let ranks: [String; 8] = std::array::from_fn(|i| split[i].to_owned());

    Ok(PositionFields {
        ranks,
        side_to_move: side_part.to_owned(),
        castling: castling_part.to_owned(),
        en_passant: en_passant_part.to_owned(),
        halfmove: halfmove_part.to_owned(),
        fullmove: fullmove_part.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn splits_the_starting_position() {
        let fields = parse_fen_fields(STARTING_POSITION_FEN).expect("start FEN should split");
        assert_eq!(fields.ranks[0], "rnbqkbnr");
        assert_eq!(fields.ranks[3], "8");
        assert_eq!(fields.ranks[7], "RNBQKBNR");
        assert_eq!(fields.side_to_move, "w");
        assert_eq!(fields.castling, "KQkq");
        assert_eq!(fields.en_passant, "-");
        assert_eq!(fields.halfmove, "0");
        assert_eq!(fields.fullmove, "1");
    }

    #[test]
    fn counters_are_optional() {
        let fields = parse_fen_fields("8/8/8/8/8/8/8/K6k b - e3").expect("short FEN should split");
        assert_eq!(fields.en_passant, "e3");
        assert_eq!(fields.halfmove, "0");
        assert_eq!(fields.fullmove, "1");
    }

    #[test]
    fn structural_errors() {
        assert!(matches!(
            parse_fen_fields("8/8/8/8/8/8/8 w - -"),
            Err(ChessErrors::InvalidFenString(_))
        ));
        assert!(matches!(
            parse_fen_fields("8/8/8/8/8/8/8/8 w"),
            Err(ChessErrors::InvalidFenString(_))
        ));
        assert!(matches!(
            parse_fen_fields("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(ChessErrors::InvalidFenString(_))
        ));
    }
}
