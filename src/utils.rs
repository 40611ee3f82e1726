#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Coerce an arbitrary Python object into a contiguous 1-D float64
/// array view.
///
/// Accepts, in order of preference: a numpy array, anything exposing a
/// `to_numpy` method (e.g. a pandas Series), and finally any sequence of
/// floats, which is copied into a fresh array. Rejects everything else
/// with a `TypeError`.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Extract the observation slice from an array view, with a uniform
/// error for non-contiguous input.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn contiguous_slice<'py, 'a>(arr: &'a PyReadonlyArray1<'py, f64>) -> PyResult<&'a [f64]> {
    arr.as_slice().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err(
            "series must be a 1-D contiguous float64 array or sequence",
        )
    })
}
