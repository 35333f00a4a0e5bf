//! The position: piece bitboards, side to move, rights, clocks and hash.
//!
//! `Board` is a small fixed-size value. Speculative work (perft descent,
//! en passant probes) clones it and mutates the clone; there is no unmake.
//! `set_piece_on_square` and `remove_piece_on_square` are the only primitive
//! mutators, so the placement hash and phase counter can never drift from
//! the bitboards.

use tracing::warn;

use crate::chess_errors::ChessErrors;
use crate::game_state::bitboard::Bitboard;
use crate::game_state::castle_rules::CastleRules;
use crate::game_state::chess_types::*;
use crate::game_state::zobrist::ZobristHash;
use crate::move_generation::attack_map;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::fen_parser::{parse_fen_fields, PositionFields};

const LIGHT_SQUARES: Bitboard = Bitboard(0x55AA_55AA_55AA_55AA);
const DARK_SQUARES: Bitboard = Bitboard(0xAA55_AA55_AA55_AA55);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    occupancy: [Bitboard; 2],
    pieces: [Bitboard; 6],

    side_to_move: Color,
    castle_rights: CastlingRights,
    en_passant: Option<Square>,

    half_moves: u16,
    fullmove_number: u16,

    hash: ZobristHash,
    phase: u8,

    // Indexed by `CastleSide::registry_index`.
    rooks: [Option<Square>; 4],
    chess960: bool,
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Board {
    fn empty() -> Self {
        Board {
            occupancy: [Bitboard::EMPTY; 2],
            pieces: [Bitboard::EMPTY; 6],
            side_to_move: Color::Light,
            castle_rights: 0,
            en_passant: None,
            half_moves: 0,
            fullmove_number: 1,
            hash: ZobristHash::default(),
            phase: 0,
            rooks: [None; 4],
            chess960: false,
        }
    }

    /// Standard initial array with all four rights.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for color in Color::ALL {
            let home = color.home_rank();
            let pawn_rank = match color {
                Color::Light => 1,
                Color::Dark => 6,
            };
            for (file, piece) in back_rank.iter().enumerate() {
                board.set_piece_on_square(make_square(home, file as u8), *piece, color);
                board.set_piece_on_square(make_square(pawn_rank, file as u8), PieceKind::Pawn, color);
            }
            board.rooks[CastleSide::King.registry_index(color)] = Some(make_square(home, 7));
            board.rooks[CastleSide::Queen.registry_index(color)] = Some(make_square(home, 0));
        }

        board.castle_rights = CASTLE_ALL;
        board
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Board::from_fields(&parse_fen_fields(fen)?)
    }

    /// Build a position from already-split FEN fields.
    ///
    /// Castle tokens accept `KQkq` (outermost rook on that wing) as well as
    /// rook file letters `A`-`H` / `a`-`h`. A position where the side not to
    /// move is in check is rejected with [`ChessErrors::IllegalPosition`].
    pub fn from_fields(fields: &PositionFields) -> Result<Self, ChessErrors> {
        let mut board = Board::empty();

        for (row, text) in fields.ranks.iter().enumerate() {
            board.place_rank(7 - row as u8, text)?;
        }

        for color in Color::ALL {
            match board.piece_mask_for(PieceKind::King, color).popcount() {
                0 => return Err(ChessErrors::MissingKing(color)),
                1 => {}
                _ => return Err(ChessErrors::TooManyKings(color)),
            }
        }

        board.side_to_move = match fields.side_to_move.as_str() {
            "w" => Color::Light,
            "b" => Color::Dark,
            other => return Err(ChessErrors::InvalidSideToMove(other.to_owned())),
        };

        if attack_map::is_in_check(&board, board.side_to_move.opposite()) {
            warn!(ranks = ?fields.ranks, "rejecting position with the side not to move in check");
            return Err(ChessErrors::IllegalPosition);
        }

        board.parse_castle_rights(&fields.castling)?;

        board.en_passant = match fields.en_passant.as_str() {
            "-" => None,
            text => {
                let square = algebraic_to_square(text)
                    .map_err(|_| ChessErrors::InvalidEnPassantSquare(text.to_owned()))?;
                let expected_rank = match board.side_to_move {
                    Color::Light => 5,
                    Color::Dark => 2,
                };
                // The target must be empty with the double-pushed pawn in front of it.
                let valid = square_rank(square) == expected_rank
                    && !board.occupancy_all().contains(square)
                    && board
                        .piece_mask_for(PieceKind::Pawn, board.side_to_move.opposite())
                        .contains(pawn_behind(square, board.side_to_move));
                if !valid {
                    return Err(ChessErrors::InvalidEnPassantSquare(text.to_owned()));
                }
                Some(square)
            }
        };

        board.half_moves = parse_counter(&fields.halfmove)?;
        board.fullmove_number = parse_counter(&fields.fullmove)?;

        Ok(board)
    }

    fn place_rank(&mut self, rank: u8, text: &str) -> Result<(), ChessErrors> {
        let invalid_rank = || ChessErrors::InvalidRank {
            rank: rank + 1,
            text: text.to_owned(),
        };
        let mut file = 0u8;

        for ch in text.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(invalid_rank());
                }
                file += run as u8;
                if file > 8 {
                    return Err(invalid_rank());
                }
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            if file >= 8 {
                return Err(invalid_rank());
            }
            if piece == PieceKind::Pawn && (rank == 0 || rank == 7) {
                return Err(ChessErrors::PawnOnBackRank(square_to_algebraic(make_square(rank, file))));
            }
            self.set_piece_on_square(make_square(rank, file), piece, color);
            file += 1;
        }

        if file != 8 {
            return Err(invalid_rank());
        }
        Ok(())
    }

    fn parse_castle_rights(&mut self, token: &str) -> Result<(), ChessErrors> {
        if token == "-" {
            return Ok(());
        }

        for ch in token.chars() {
            let color = if ch.is_ascii_uppercase() { Color::Light } else { Color::Dark };
            let home = color.home_rank();
            let king = self.king_square(color);
            if square_rank(king) != home {
                return Err(ChessErrors::InvalidCastleRights(ch));
            }
            let own_rooks = self.piece_mask_for(PieceKind::Rook, color) & Bitboard::RANKS[home as usize];
            let king_file = square_file(king);

            let rook_file = match ch.to_ascii_lowercase() {
                'k' => (king_file + 1..8)
                    .rev()
                    .find(|&file| own_rooks.contains(make_square(home, file))),
                'q' => (0..king_file).find(|&file| own_rooks.contains(make_square(home, file))),
                letter @ 'a'..='h' => {
                    self.chess960 = true;
                    let file = letter as u8 - b'a';
                    own_rooks.contains(make_square(home, file)).then_some(file)
                }
                _ => None,
            }
            .ok_or(ChessErrors::InvalidCastleRights(ch))?;

            let side = if rook_file > king_file { CastleSide::King } else { CastleSide::Queen };
            let corner = match side {
                CastleSide::King => 7,
                CastleSide::Queen => 0,
            };
            if king_file != 4 || rook_file != corner {
                self.chess960 = true;
            }

            self.castle_rights |= side.right(color);
            self.rooks[side.registry_index(color)] = Some(make_square(home, rook_file));
        }

        Ok(())
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castle_rights(&self) -> CastlingRights {
        self.castle_rights
    }

    #[inline]
    pub fn can_castle(&self, side: CastleSide, color: Color) -> bool {
        self.castle_rights & side.right(color) != 0
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn half_moves(&self) -> u16 {
        self.half_moves
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Weighted non-pawn material, 24 in the starting position.
    #[inline]
    pub fn phase(&self) -> u8 {
        self.phase
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupancy[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> Bitboard {
        self.occupancy[0] | self.occupancy[1]
    }

    /// Pieces of `piece` kind for both colours.
    #[inline]
    pub fn piece_mask(&self, piece: PieceKind) -> Bitboard {
        self.pieces[piece.index()]
    }

    #[inline]
    pub fn piece_mask_for(&self, piece: PieceKind, color: Color) -> Bitboard {
        self.pieces[piece.index()] & self.occupancy[color.index()]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.piece_mask_for(PieceKind::King, color).lsb_square()
    }

    pub fn piece_on_square(&self, square: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|piece| self.pieces[piece.index()].contains(square))
    }

    pub fn color_on_square(&self, square: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.occupancy[color.index()].contains(square))
    }

    /// Home square of the rook that castles to `side`, if that right was
    /// ever granted.
    #[inline]
    pub fn rook_square(&self, side: CastleSide, color: Color) -> Option<Square> {
        self.rooks[side.registry_index(color)]
    }

    #[inline]
    pub fn is_chess960(&self) -> bool {
        self.chess960
    }

    /// Full position hash with side, rights and en passant folded in.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash.folded(self.side_to_move, self.castle_rights, self.en_passant)
    }

    /// Piece-placement-only part of the hash.
    #[inline]
    pub fn placement_hash(&self) -> u64 {
        self.hash.placement()
    }

    /// Castle rules for this position. Build once per game and reuse.
    pub fn castle_rules(&self) -> CastleRules {
        CastleRules::new(
            self.rooks,
            [self.king_square(Color::Light), self.king_square(Color::Dark)],
        )
    }

    pub fn is_in_check(&self) -> bool {
        attack_map::is_in_check(self, self.side_to_move)
    }

    /// Dead positions: bare kings, a single minor, or bishops of one square
    /// colour split between the sides.
    pub fn is_insufficient_material(&self) -> bool {
        if self.phase > 2 || self.pieces[PieceKind::Pawn.index()].is_not_empty() {
            return false;
        }
        if self.phase < 2 {
            return true;
        }

        let bishops = self.pieces[PieceKind::Bishop.index()];
        let split_between_sides = (bishops & self.occupancy[0]) != bishops
            && (bishops & self.occupancy[1]) != bishops;
        let one_square_colour = (bishops & LIGHT_SQUARES) == bishops || (bishops & DARK_SQUARES) == bishops;

        split_between_sides && one_square_colour
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Place a piece on an empty square.
    #[inline]
    pub fn set_piece_on_square(&mut self, square: Square, piece: PieceKind, color: Color) {
        debug_assert!(!self.occupancy_all().contains(square));
        self.pieces[piece.index()].set(square);
        self.occupancy[color.index()].set(square);
        self.hash.toggle_piece(piece, color, square);
        self.phase += piece.phase_weight();
    }

    /// Remove a piece that is known to stand on `square`.
    #[inline]
    pub fn remove_piece_on_square(&mut self, square: Square, piece: PieceKind, color: Color) {
        debug_assert!(self.piece_mask_for(piece, color).contains(square));
        self.pieces[piece.index()].clear(square);
        self.occupancy[color.index()].clear(square);
        self.hash.toggle_piece(piece, color, square);
        self.phase -= piece.phase_weight();
    }

    /// Apply a legal move. There is no undo; clone first when the previous
    /// position is still needed.
    ///
    /// # Panics
    ///
    /// If `from` is empty. `mv` must come from the legal move generator for
    /// this exact position.
    pub fn make_move(&mut self, mv: Move, rules: &CastleRules) {
        let from = mv.from_square();
        let to = mv.to_square();
        let us = self.side_to_move;
        let them = us.opposite();

        let moved = self
            .piece_on_square(from)
            .expect("make_move requires a piece on the from square");

        // The castle destination holds our own rook.
        if !mv.is_castle() {
            if let Some(captured) = self.piece_on_square(to) {
                self.remove_piece_on_square(to, captured, them);
            }
        }

        self.remove_piece_on_square(from, moved, us);
        if !mv.is_castle() && !mv.is_promotion() {
            self.set_piece_on_square(to, moved, us);
        }

        if moved == PieceKind::Pawn || mv.is_capture() {
            self.half_moves = 0;
        } else {
            self.half_moves += 1;
        }

        self.castle_rights &= !(rules.mask(from) | rules.mask(to));
        self.en_passant = None;

        if let Some(side) = mv.castle_side() {
            let home = us.home_rank();
            self.remove_piece_on_square(to, PieceKind::Rook, us);
            self.set_piece_on_square(make_square(home, side.king_destination_file()), PieceKind::King, us);
            self.set_piece_on_square(make_square(home, side.rook_destination_file()), PieceKind::Rook, us);
        } else if mv.is_double_push() {
            self.en_passant = Some(pawn_behind(to, us));
        } else if mv.is_en_passant() {
            self.remove_piece_on_square(pawn_behind(to, us), PieceKind::Pawn, them);
        } else if let Some(promoted) = mv.promotion_piece() {
            self.set_piece_on_square(to, promoted, us);
        }

        if us == Color::Dark {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;
    }
}

/// Square one rank behind `square` from `mover`'s point of view.
#[inline]
fn pawn_behind(square: Square, mover: Color) -> Square {
    match mover {
        Color::Light => square - 8,
        Color::Dark => square + 8,
    }
}

fn parse_counter(text: &str) -> Result<u16, ChessErrors> {
    text.parse::<u16>()
        .map_err(|_| ChessErrors::InvalidCounter(text.to_owned()))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{STARTING_PHASE, STARTING_POSITION_FEN};
    use crate::utils::long_algebraic::find_legal_move;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

    fn assert_consistent(board: &Board) {
        let mut union = Bitboard::EMPTY;
        for piece in PieceKind::ALL {
            let mask = board.piece_mask(piece);
            assert!((union & mask).is_empty(), "piece masks overlap");
            union |= mask;
        }
        assert_eq!(union, board.occupancy_all());
        assert!((board.occupancy(Color::Light) & board.occupancy(Color::Dark)).is_empty());

        let mut rebuilt = ZobristHash::default();
        let mut phase = 0;
        for square in union {
            let piece = board.piece_on_square(square).expect("occupied square has a piece");
            let color = board.color_on_square(square).expect("occupied square has a colour");
            rebuilt.toggle_piece(piece, color, square);
            phase += piece.phase_weight();
        }
        assert_eq!(rebuilt.placement(), board.placement_hash());
        assert_eq!(phase, board.phase());
    }

    fn play(board: &mut Board, rules: &CastleRules, uci: &str) {
        let mv = find_legal_move(board, rules, uci).expect("move should be legal");
        board.make_move(mv, rules);
        assert_consistent(board);
    }

    #[test]
    fn starting_position_matches_the_fen() {
        let built = Board::starting_position();
        let parsed = Board::from_fen(STARTING_POSITION_FEN).expect("start FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.phase(), STARTING_PHASE);
        assert_eq!(built.castle_rights(), CASTLE_ALL);
        assert_eq!(built.hash(), parsed.hash());
        assert!(!built.is_chess960());
        assert_consistent(&built);
        assert_eq!(Board::default(), built);
    }

    #[test]
    fn hash_read_is_stable_and_tracks_state() {
        let mut board = Board::starting_position();
        let rules = board.castle_rules();
        let before = board.hash();
        assert_eq!(before, board.hash());

        let copy = board.clone();
        play(&mut board, &rules, "g1f3");
        assert_ne!(board.hash(), before);
        assert_eq!(copy.hash(), before);

        // Knights out and back restores placement, side and rights.
        play(&mut board, &rules, "g8f6");
        play(&mut board, &rules, "f3g1");
        play(&mut board, &rules, "f6g8");
        assert_eq!(board.hash(), before);
        assert_eq!(board.half_moves(), 4);
        assert_eq!(board.fullmove_number(), 3);
    }

    #[test]
    fn double_push_sets_en_passant_and_it_clears_next_move() {
        let mut board = Board::starting_position();
        let rules = board.castle_rules();
        play(&mut board, &rules, "e2e4");
        assert_eq!(board.en_passant_square(), Some(20));
        assert_eq!(board.half_moves(), 0);
        play(&mut board, &rules, "g8f6");
        assert_eq!(board.en_passant_square(), None);
        assert_eq!(board.half_moves(), 1);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut board =
            Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("en passant FEN should parse");
        let rules = board.castle_rules();
        play(&mut board, &rules, "e5d6");
        assert_eq!(board.piece_on_square(43), Some(PieceKind::Pawn));
        assert_eq!(board.piece_on_square(35), None);
        assert_eq!(board.occupancy(Color::Dark).popcount(), 1);
    }

    #[test]
    fn castling_moves_king_and_rook_and_drops_rights() {
        let mut board = Board::from_fen(KIWIPETE).expect("kiwipete should parse");
        let rules = board.castle_rules();
        play(&mut board, &rules, "e1g1");
        assert_eq!(board.piece_on_square(6), Some(PieceKind::King));
        assert_eq!(board.piece_on_square(5), Some(PieceKind::Rook));
        assert_eq!(board.piece_on_square(7), None);
        assert_eq!(board.piece_on_square(4), None);
        assert_eq!(board.castle_rights(), CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);

        play(&mut board, &rules, "e8c8");
        assert_eq!(board.piece_on_square(58), Some(PieceKind::King));
        assert_eq!(board.piece_on_square(59), Some(PieceKind::Rook));
        assert_eq!(board.castle_rights(), 0);
    }

    #[test]
    fn capturing_a_rook_clears_its_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let rules = board.castle_rules();
        play(&mut board, &rules, "a1a8");
        assert_eq!(board.castle_rights(), CASTLE_LIGHT_KINGSIDE | CASTLE_DARK_KINGSIDE);
    }

    #[test]
    fn promotion_places_the_new_piece() {
        let mut board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let rules = board.castle_rules();
        let phase = board.phase();
        play(&mut board, &rules, "a7b8q");
        assert_eq!(board.piece_on_square(57), Some(PieceKind::Queen));
        assert_eq!(board.piece_mask(PieceKind::Pawn), Bitboard::EMPTY);
        assert_eq!(board.phase(), phase - 1 + 4);
    }

    #[test]
    fn chess960_castle_tokens() {
        let board = Board::from_fen("bqnb1rkr/pp3ppp/3ppn2/2p5/5P2/P2P4/NPP1P1PP/BQ1BNRKR w HFhf - 2 9")
            .expect("960 FEN should parse");
        assert!(board.is_chess960());
        assert_eq!(board.castle_rights(), CASTLE_ALL);
        assert_eq!(board.rook_square(CastleSide::King, Color::Light), Some(7));
        assert_eq!(board.rook_square(CastleSide::Queen, Color::Light), Some(5));
        assert_eq!(board.rook_square(CastleSide::Queen, Color::Dark), Some(61));
        assert_eq!(board.fullmove_number(), 9);

        let outer = Board::from_fen("rk2r3/8/8/8/8/8/8/RK2R3 w KQkq - 0 1").expect("shredder-free 960 FEN");
        assert!(outer.is_chess960());
        assert_eq!(outer.rook_square(CastleSide::King, Color::Light), Some(4));
        assert_eq!(outer.rook_square(CastleSide::Queen, Color::Dark), Some(56));
    }

    #[test]
    fn rejected_positions() {
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4R2K w - - 0 1"),
            Err(ChessErrors::IllegalPosition)
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::MissingKing(Color::Dark))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(ChessErrors::TooManyKings(Color::Light))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K2X w - - 0 1"),
            Err(ChessErrors::InvalidFenToken('X'))
        );
        assert!(matches!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K w - - 0 1"),
            Err(ChessErrors::InvalidRank { rank: 1, .. })
        ));
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(ChessErrors::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1"),
            Err(ChessErrors::InvalidCastleRights('K'))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1"),
            Err(ChessErrors::InvalidEnPassantSquare("e4".to_owned()))
        );
        // En passant target without a pawn that could have double pushed.
        assert_eq!(
            Board::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1"),
            Err(ChessErrors::InvalidEnPassantSquare("d6".to_owned()))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/3nP3/8/8/8/4K3 w - d6 0 1"),
            Err(ChessErrors::InvalidEnPassantSquare("d6".to_owned()))
        );
        assert_eq!(
            Board::from_fen("4k3/8/3b4/3pP3/8/8/8/4K3 w - d6 0 1"),
            Err(ChessErrors::InvalidEnPassantSquare("d6".to_owned()))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - a1 0 1"),
            Err(ChessErrors::InvalidEnPassantSquare("a1".to_owned()))
        );
        assert_eq!(
            Board::from_fen("4k2P/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::PawnOnBackRank("h8".to_owned()))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/p3K3 b - - 0 1"),
            Err(ChessErrors::PawnOnBackRank("a1".to_owned()))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            Err(ChessErrors::InvalidCounter("x".to_owned()))
        );
    }

    #[test]
    fn insufficient_material() {
        let cases = [
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/2N1K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1", true),
            // Opposite sides, both bishops on dark squares (c1, f8).
            ("4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1", true),
            // Same side bishop pair.
            ("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1", false),
            // Opposite sides, different square colours (c1, c8).
            ("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", false),
        ];
        for (fen, expected) in cases {
            let board = Board::from_fen(fen).expect("test FEN should parse");
            assert_eq!(board.is_insufficient_material(), expected, "{fen}");
        }
    }
}
