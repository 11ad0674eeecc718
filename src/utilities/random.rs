//! Random sparse containers, used by the randomized cross-check tests.
//!
//! Values are small integers represented as `f64`, so every product and sum
//! in a cross-checked computation is exact and results can be compared with
//! `==`.

use crate::containers::matrix::Matrix;
use crate::containers::vector::Vector;
use crate::index::Index;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// Generate a vector of size `size` where each position independently holds
/// a stored entry with probability `fill`.
pub fn randgen_sparse_vector( size: Index, fill: f64, seed: u64 ) -> Vector< f64 > {
    let mut rng = StdRng::seed_from_u64( seed );
    let mut entries: Vec<(Index, f64)> = Vec::new();
    for index in 0 .. size {
        if rng.gen::<f64>() < fill {
            entries.push( ( index, rng.gen_range( -4 ..= 4 ) as f64 ) );
        }
    }
    let mut vector = Vector::new( size );
    vector.set_contents( entries );
    vector
}

/// Generate an `nrows × ncols` matrix where each position independently
/// holds a stored entry with probability `fill`.
pub fn randgen_sparse_matrix( nrows: Index, ncols: Index, fill: f64, seed: u64 ) -> Matrix< f64 > {
    let mut rng = StdRng::seed_from_u64( seed );
    let mut matrix = Matrix::new( nrows, ncols );
    for row in 0 .. nrows {
        let mut entries: Vec<(Index, f64)> = Vec::new();
        for col in 0 .. ncols {
            if rng.gen::<f64>() < fill {
                entries.push( ( col, rng.gen_range( -4 ..= 4 ) as f64 ) );
            }
        }
        matrix.set_row_contents( row, entries );
    }
    matrix
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_generators_respect_shape_and_order() {
        let vector  =   randgen_sparse_vector( 20, 0.5, 7 );
        assert_eq!( 20, vector.size() );
        assert!( vector.contents().windows( 2 ).all( | w | w[0].0 < w[1].0 ) );

        let matrix  =   randgen_sparse_matrix( 8, 6, 0.5, 7 );
        assert_eq!( 8, matrix.nrows() );
        for row in 0 .. matrix.nrows() {
            assert!( matrix.row( row ).iter().all( | entry | entry.0 < 6 ) );
        }
    }

    #[test]
    fn test_generators_are_deterministic() {
        assert_eq!(
            randgen_sparse_vector( 10, 0.5, 42 ),
            randgen_sparse_vector( 10, 0.5, 42 ),
        );
    }
}
