// Python-grensesnitt (bygges med --features python).
// Dette er ytterste kallgrense: dagsrapporten logger og svelger feil her.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::report;

fn to_py_err(e: crate::TrackerError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// "steg,varighet" -> tekst. Tom streng ved feil (feilen logges).
#[pyfunction]
fn daily_step_report(record: &str, weight_kg: f64, height_m: f64) -> String {
    report::daily_step_report_text(record, weight_kg, height_m)
}

/// "steg,aktivitet,varighet" -> tekst, ValueError ved feil.
#[pyfunction]
fn training_report(record: &str, weight_kg: f64, height_m: f64) -> PyResult<String> {
    report::training_report_text(record, weight_kg, height_m).map_err(to_py_err)
}

#[pyfunction]
fn training_report_json(record: &str, weight_kg: f64, height_m: f64) -> PyResult<String> {
    let r = report::training_report(record, weight_kg, height_m).map_err(to_py_err)?;
    serde_json::to_string(&r).map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

#[pymodule]
fn steptracker_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(daily_step_report, m)?)?;
    m.add_function(wrap_pyfunction!(training_report, m)?)?;
    m.add_function(wrap_pyfunction!(training_report_json, m)?)?;
    Ok(())
}
