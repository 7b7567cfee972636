//! Layout strings for Lines of Action positions, in the style of chess FEN.
//!
//! Layout ::= Rows ' ' Side [' ' MovesMade]
//! * Rows: 8 rows from row 8 down to row 1, separated by '/'.
//!   Each row lists columns a to h: 'b' for Black, 'w' for White,
//!   and a digit 1-8 for a run of empty squares.
//! * Side: 'b' or 'w', the side to move.
//! * MovesMade: optional count of moves already made, defaults to 0.
//!
//! Start position: `1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b`

use std::convert::TryFrom;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::coretypes::{MoveCount, Side, Square, NUM_COLUMNS, NUM_ROWS};
use crate::error::{self, ErrorKind};

pub trait Fen: Sized {
    fn parse_fen(layout: &str) -> error::Result<Self>;
    fn to_fen(&self) -> String;
}

/// Parse one row of a layout into the pieces it places on `row`.
fn parse_row(row_str: &str, row: u8) -> error::Result<(Bitboard, Bitboard)> {
    let mut black = Bitboard::EMPTY;
    let mut white = Bitboard::EMPTY;
    let mut column: u8 = 0;

    for ch in row_str.chars() {
        match ch {
            '1'..='8' => {
                column += ch as u8 - b'0';
                if column as usize > NUM_COLUMNS {
                    return Err((ErrorKind::ParseLayoutMalformed, "row too long").into());
                }
            }
            'b' | 'w' => {
                let square = Square::new(column, row)
                    .ok_or((ErrorKind::ParseLayoutMalformed, "row too long"))?;
                match Side::try_from(ch)? {
                    Side::Black => black.set_square(square),
                    Side::White => white.set_square(square),
                }
                column += 1;
            }
            _ => return Err((ErrorKind::ParseLayoutMalformed, ch).into()),
        }
    }

    if column as usize != NUM_COLUMNS {
        return Err((
            ErrorKind::ParseLayoutMalformed,
            format!("row {} has {column} columns", row + 1),
        )
            .into());
    }
    Ok((black, white))
}

impl Fen for Board {
    fn parse_fen(layout: &str) -> error::Result<Self> {
        let mut fields = layout.split_whitespace();
        let rows_str = fields
            .next()
            .ok_or((ErrorKind::ParseLayoutMalformed, "empty layout"))?;
        let side_str = fields
            .next()
            .ok_or((ErrorKind::ParseLayoutMalformed, "missing side to move"))?;
        let moves_made: MoveCount = match fields.next() {
            Some(moves_str) => moves_str
                .parse()
                .map_err(|err| error::Error::new(ErrorKind::ParseLayoutMalformed, err))?,
            None => 0,
        };
        if fields.next().is_some() {
            return Err((ErrorKind::ParseLayoutMalformed, "trailing fields").into());
        }

        let rows: Vec<&str> = rows_str.split('/').collect();
        if rows.len() != NUM_ROWS {
            return Err((
                ErrorKind::ParseLayoutMalformed,
                format!("expected {NUM_ROWS} rows, found {}", rows.len()),
            )
                .into());
        }

        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        for (row_str, row) in rows.iter().zip((0..NUM_ROWS as u8).rev()) {
            let (row_black, row_white) = parse_row(row_str, row)?;
            black |= row_black;
            white |= row_white;
        }

        let turn = side_str.parse::<Side>()?;
        let mut board = Board::from_pieces(black, white, turn)
            .map_err(|err| error::Error::new(ErrorKind::ParseLayoutMalformed, err))?;
        board.set_moves_made(moves_made)?;
        Ok(board)
    }

    fn to_fen(&self) -> String {
        let mut rows = Vec::with_capacity(NUM_ROWS);
        for row in (0..NUM_ROWS as u8).rev() {
            let mut row_str = String::new();
            let mut empty = 0;
            for column in 0..NUM_COLUMNS as u8 {
                match Square::new(column, row).and_then(|sq| self.piece_at(sq)) {
                    Some(side) => {
                        if empty > 0 {
                            row_str.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row_str.push(side.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row_str.push_str(&empty.to_string());
            }
            rows.push(row_str);
        }

        let mut layout = format!("{} {}", rows.join("/"), self.turn().to_char());
        if self.moves_made() > 0 {
            layout.push_str(&format!(" {}", self.moves_made()));
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b";

    #[test]
    fn start_position_layout() {
        assert_eq!(Board::parse_fen(START).unwrap(), Board::start_position());
        assert_eq!(Board::start_position().to_fen(), START);
    }

    #[test]
    fn moves_made_field() {
        let board = Board::parse_fen("8/8/3b4/8/8/2w5/8/8 w 25").unwrap();
        assert_eq!(board.moves_made(), 25);
        assert_eq!(board.turn(), Side::White);
        assert_eq!(board.to_fen(), "8/8/3b4/8/8/2w5/8/8 w 25");
    }

    #[test]
    fn malformed_layouts() {
        let bad = [
            "",
            "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w b",
            "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb b",
            "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb11 b",
            "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbxbbb1 b",
            "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 x",
            "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1",
            "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b -3",
            "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b 60",
            "bbbbbbbb/bbbbb3/8/8/8/8/8/w6w b",
        ];
        for layout in bad {
            assert!(Board::parse_fen(layout).is_err(), "{layout}");
        }
    }

    #[test]
    fn long_digit_runs_rejected() {
        for repeat in [2, 33, 40] {
            let layout = format!("{}/8/8/8/8/8/8/8 b", "8".repeat(repeat));
            let err = Board::parse_fen(&layout).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseLayoutMalformed, "{layout}");
        }
    }

    #[test]
    fn too_many_pieces_rejected() {
        // 16 black pieces.
        let layout = "b1b1b1b1/8/b1b1b1b1/8/b1b1b1b1/8/b1b1b1b1/w6w w";
        let err = Board::parse_fen(layout).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseLayoutMalformed);

        // 12 pieces each is the start position count and still allowed.
        assert!(Board::parse_fen("bbbbbbbb/bbbb4/8/8/8/8/wwww4/wwwwwwww w").is_ok());
    }
}
