//! Window many independent sequences at once.
//!
//! Every lane along the chosen axis is one sequence. The weight curve is
//! computed once and the lanes are processed in parallel.

use ndarray::{parallel::prelude::*, ArrayViewMut2, Axis};
use num_traits::{Float, FloatConst};

use crate::{
    error::WindowError,
    window::{weights, WindowKind},
};

/// apply the window to every row, i.e. each row is one sequence
pub fn apply_rows<T>(
    data: ArrayViewMut2<T>,
    kind: WindowKind,
    alpha: Option<T>,
) -> Result<(), WindowError>
where
    T: Float + FloatConst + Send + Sync,
{
    apply_along(data, Axis(1), kind, alpha)
}

/// apply the window along `axis`, so every 1-d lane parallel to `axis` is one sequence
pub fn apply_along<T>(
    mut data: ArrayViewMut2<T>,
    axis: Axis,
    kind: WindowKind,
    alpha: Option<T>,
) -> Result<(), WindowError>
where
    T: Float + FloatConst + Send + Sync,
{
    let across = match axis.index() {
        0 => Axis(1),
        1 => Axis(0),
        i => return Err(WindowError::InvalidAxis { axis: i }),
    };
    let w = weights(kind, data.len_of(axis), alpha)?;
    tracing::trace!(window = %kind, points = w.len(), lanes = data.len_of(across), "batch window");

    data.axis_iter_mut(across)
        .into_par_iter()
        .for_each(|mut lane| {
            lane.iter_mut().zip(&w).for_each(|(x, &k)| *x = *x * k);
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::apply;
    use ndarray::Array2;

    #[test]
    fn rows_match_single_sequence() {
        let mut data = Array2::<f64>::from_shape_fn((7, 33), |(i, j)| (i * 33 + j) as f64 * 0.01);
        let expected: Vec<Vec<f64>> = data
            .rows()
            .into_iter()
            .map(|r| {
                let mut v = r.to_vec();
                apply(&mut v, WindowKind::BlackmanHarris, None).unwrap();
                v
            })
            .collect();

        apply_rows(data.view_mut(), WindowKind::BlackmanHarris, None).unwrap();
        for (row, e) in data.rows().into_iter().zip(&expected) {
            assert_eq!(row.to_vec(), *e);
        }
    }

    #[test]
    fn columns_as_sequences() {
        let mut data = Array2::<f64>::ones((16, 5));
        apply_along(data.view_mut(), Axis(0), WindowKind::Hann, None).unwrap();
        let w = weights::<f64>(WindowKind::Hann, 16, None).unwrap();
        for col in data.columns() {
            assert_eq!(col.to_vec(), w);
        }
    }

    #[test]
    fn axis_out_of_range_is_an_error() {
        let mut data = Array2::<f64>::ones((4, 4));
        assert!(matches!(
            apply_along(data.view_mut(), Axis(2), WindowKind::Hann, None),
            Err(WindowError::InvalidAxis { axis: 2 })
        ));
        assert!(data.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn short_lanes_leave_data_untouched() {
        let mut data = Array2::<f64>::from_elem((4, 1), 2.0);
        assert!(matches!(
            apply_rows(data.view_mut(), WindowKind::Kaiser, Some(5.0)),
            Err(WindowError::InvalidLength { points: 1 })
        ));
        assert!(data.iter().all(|&x| x == 2.0));
    }
}
