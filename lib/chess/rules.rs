use crate::chess::{Piece, Rank, Role, Side, Square};

/// The offset from one [`Square`] to another.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Displacement {
    /// Signed number of ranks crossed, positive towards black's back rank.
    #[cfg_attr(test, strategy(-7i8..=7))]
    pub ranks: i8,
    /// Signed number of files crossed, positive towards the `j` file.
    #[cfg_attr(test, strategy(-9i8..=9))]
    pub files: i8,
}

impl Displacement {
    /// The displacement from `whence` to `whither`.
    #[inline(always)]
    pub fn between(whence: Square, whither: Square) -> Self {
        Displacement {
            ranks: whither.rank() - whence.rank(),
            files: whither.file() - whence.file(),
        }
    }

    /// Whether this displacement lies on a diagonal.
    ///
    /// The null displacement counts as diagonal.
    #[inline(always)]
    pub fn is_diagonal(&self) -> bool {
        self.ranks == self.files || self.ranks == -self.files
    }

    /// Whether this displacement lies on a rank or a file.
    ///
    /// The null displacement counts as orthogonal.
    #[inline(always)]
    pub fn is_orthogonal(&self) -> bool {
        self.ranks == 0 || self.files == 0
    }

    /// Whether this displacement is a knight's leap.
    #[inline(always)]
    pub fn is_leap(&self) -> bool {
        matches!(
            (self.ranks.unsigned_abs(), self.files.unsigned_abs()),
            (2, 1) | (1, 2)
        )
    }

    /// Whether this displacement is at most one square in every direction.
    #[inline(always)]
    pub fn is_step(&self) -> bool {
        self.ranks.unsigned_abs() <= 1 && self.files.unsigned_abs() <= 1
    }
}

/// Trait for types that decide whether a piece may move between two squares.
#[cfg_attr(test, mockall::automock)]
pub trait Rules {
    /// Whether `piece` may be relocated from `whence` to `whither`.
    fn permits(&self, piece: Piece, whence: Square, whither: Square) -> bool;
}

/// Movement rules that only take the shape of the move into account.
///
/// Sliding pieces are not obstructed by other pieces, pawns never capture
/// diagonally and nothing prevents the king from moving into check.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Geometry;

impl Geometry {
    fn pawn(side: Side, whence: Square, d: Displacement) -> bool {
        let (advance, home) = match side {
            Side::White => (1, Rank::Second),
            Side::Black => (-1, Rank::Seventh),
        };

        d.files == 0 && (d.ranks == advance || (whence.rank() == home && d.ranks == 2 * advance))
    }
}

impl Rules for Geometry {
    fn permits(&self, Piece(side, role): Piece, whence: Square, whither: Square) -> bool {
        let d = Displacement::between(whence, whither);

        match role {
            Role::Pawn => Self::pawn(side, whence, d),
            Role::Knight => d.is_leap(),
            Role::Bishop => d.is_diagonal(),
            Role::Rook => d.is_orthogonal(),
            Role::Queen => d.is_orthogonal() || d.is_diagonal(),
            Role::King => d.is_step(),
            Role::Archbishop => d.is_diagonal() || d.is_leap(),
            Role::Chancellor => d.is_orthogonal() || d.is_leap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::File;
    use crate::util::Integer;
    use test_strategy::proptest;

    #[proptest]
    fn displacement_is_the_difference_of_ranks_and_files(a: Square, b: Square) {
        assert_eq!(
            Displacement::between(a, b),
            Displacement {
                ranks: b.rank() - a.rank(),
                files: b.file() - a.file(),
            }
        );
    }

    #[proptest]
    fn displacement_is_antisymmetric(a: Square, b: Square) {
        let d = Displacement::between(a, b);
        let e = Displacement::between(b, a);
        assert_eq!((d.ranks, d.files), (-e.ranks, -e.files));
    }

    #[proptest]
    fn null_displacement_is_diagonal_orthogonal_and_a_step(sq: Square) {
        let d = Displacement::between(sq, sq);
        assert!(d.is_diagonal());
        assert!(d.is_orthogonal());
        assert!(d.is_step());
        assert!(!d.is_leap());
    }

    #[proptest]
    fn leaps_are_never_diagonal_orthogonal_or_steps(d: Displacement) {
        if d.is_leap() {
            assert!(!d.is_diagonal());
            assert!(!d.is_orthogonal());
            assert!(!d.is_step());
        }
    }

    #[proptest]
    fn bishop_moves_diagonally(s: Side, a: Square, b: Square) {
        let d = Displacement::between(a, b);
        assert_eq!(
            Geometry.permits(Piece(s, Role::Bishop), a, b),
            d.ranks.abs() == d.files.abs()
        );
    }

    #[proptest]
    fn rook_moves_along_ranks_and_files(s: Side, a: Square, b: Square) {
        assert_eq!(
            Geometry.permits(Piece(s, Role::Rook), a, b),
            a.rank() == b.rank() || a.file() == b.file()
        );
    }

    #[proptest]
    fn knight_leaps_two_squares_one_way_and_one_square_the_other(s: Side, a: Square, b: Square) {
        let d = Displacement::between(a, b);
        let shape = (d.ranks.abs(), d.files.abs());
        assert_eq!(
            Geometry.permits(Piece(s, Role::Knight), a, b),
            shape == (2, 1) || shape == (1, 2)
        );
    }

    #[proptest]
    fn king_moves_to_adjacent_squares(s: Side, a: Square, b: Square) {
        let d = Displacement::between(a, b);
        assert_eq!(
            Geometry.permits(Piece(s, Role::King), a, b),
            d.ranks.abs() <= 1 && d.files.abs() <= 1
        );
    }

    #[proptest]
    fn queen_moves_as_rook_or_bishop(s: Side, a: Square, b: Square) {
        assert_eq!(
            Geometry.permits(Piece(s, Role::Queen), a, b),
            Geometry.permits(Piece(s, Role::Rook), a, b)
                || Geometry.permits(Piece(s, Role::Bishop), a, b)
        );
    }

    #[proptest]
    fn archbishop_moves_as_bishop_or_knight(s: Side, a: Square, b: Square) {
        assert_eq!(
            Geometry.permits(Piece(s, Role::Archbishop), a, b),
            Geometry.permits(Piece(s, Role::Bishop), a, b)
                || Geometry.permits(Piece(s, Role::Knight), a, b)
        );
    }

    #[proptest]
    fn chancellor_moves_as_rook_or_knight(s: Side, a: Square, b: Square) {
        assert_eq!(
            Geometry.permits(Piece(s, Role::Chancellor), a, b),
            Geometry.permits(Piece(s, Role::Rook), a, b)
                || Geometry.permits(Piece(s, Role::Knight), a, b)
        );
    }

    #[proptest]
    fn pawn_never_moves_sideways(s: Side, a: Square, #[filter(#a.file() != #b.file())] b: Square) {
        assert!(!Geometry.permits(Piece(s, Role::Pawn), a, b));
    }

    #[proptest]
    fn white_pawn_advances_one_rank(f: File, #[strategy(0i8..7)] r: i8) {
        let a = Square::new(f, Rank::new(r));
        let b = Square::new(f, Rank::new(r + 1));
        assert!(Geometry.permits(Piece(Side::White, Role::Pawn), a, b));
        assert!(!Geometry.permits(Piece(Side::White, Role::Pawn), b, a));
    }

    #[proptest]
    fn black_pawn_advances_one_rank(f: File, #[strategy(1i8..8)] r: i8) {
        let a = Square::new(f, Rank::new(r));
        let b = Square::new(f, Rank::new(r - 1));
        assert!(Geometry.permits(Piece(Side::Black, Role::Pawn), a, b));
        assert!(!Geometry.permits(Piece(Side::Black, Role::Pawn), b, a));
    }

    #[proptest]
    fn white_pawn_advances_two_ranks_only_from_second_rank(f: File, #[strategy(0i8..6)] r: i8) {
        let a = Square::new(f, Rank::new(r));
        let b = Square::new(f, Rank::new(r + 2));
        assert_eq!(
            Geometry.permits(Piece(Side::White, Role::Pawn), a, b),
            a.rank() == Rank::Second
        );
    }

    #[proptest]
    fn black_pawn_advances_two_ranks_only_from_seventh_rank(f: File, #[strategy(2i8..8)] r: i8) {
        let a = Square::new(f, Rank::new(r));
        let b = Square::new(f, Rank::new(r - 2));
        assert_eq!(
            Geometry.permits(Piece(Side::Black, Role::Pawn), a, b),
            a.rank() == Rank::Seventh
        );
    }

    #[test]
    fn black_pawn_double_step_depends_on_its_rank() {
        let pawn = Piece(Side::Black, Role::Pawn);
        assert!(Geometry.permits(pawn, Square::D7, Square::D5));
        assert!(!Geometry.permits(pawn, Square::D6, Square::D4));
    }

    #[test]
    fn pawn_never_advances_three_ranks() {
        assert!(!Geometry.permits(Piece(Side::White, Role::Pawn), Square::C2, Square::C5));
        assert!(!Geometry.permits(Piece(Side::Black, Role::Pawn), Square::C7, Square::C4));
    }

    #[test]
    fn sliding_pieces_are_not_obstructed() {
        assert!(Geometry.permits(Piece(Side::White, Role::Rook), Square::A1, Square::F1));
        assert!(Geometry.permits(Piece(Side::White, Role::Bishop), Square::C1, Square::H6));
    }

    #[test]
    fn king_cannot_move_two_ranks() {
        assert!(!Geometry.permits(Piece(Side::White, Role::King), Square::F1, Square::F3));
    }
}
