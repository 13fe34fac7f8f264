use numpy::ndarray::ArrayView2;
use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::{pymodule, types::PyModule, Bound, PyErr, PyResult};

use crate::apriori::{sort_rules, AprioriEngine, MiningConfig, TransactionSet};
use crate::error::{MiningError, Result};

type PyItemset = Vec<String>;
type PyRule = (PyItemset, PyItemset, f64, f64, f64);

fn to_py_err(err: MiningError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Convert a presence matrix (non-zero = item present) to transactions
fn matrix_to_transactions(matrix: ArrayView2<i32>, labels: &[String]) -> Result<TransactionSet> {
    let rows = matrix
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|&cell| cell != 0).collect::<Vec<bool>>());
    TransactionSet::from_presence_rows(labels, rows)
}

fn engine(min_support: f64, min_confidence: f64, max_len: Option<usize>) -> Result<AprioriEngine> {
    AprioriEngine::new(
        MiningConfig::default()
            .with_min_support(min_support)
            .with_min_confidence(min_confidence)
            .with_max_len(max_len),
    )
}

#[pymodule]
fn apriori_rules<'py>(m: &Bound<'py, PyModule>) -> PyResult<()> {
    #[pyfn(m)]
    #[pyo3(name = "apriori", signature = (matrix, labels, min_support, max_len = None))]
    fn apriori_py<'py>(
        matrix: PyReadonlyArray2<'py, i32>,
        labels: Vec<String>,
        min_support: f64,
        max_len: Option<usize>,
    ) -> PyResult<Vec<(PyItemset, f64)>> {
        let transactions = matrix_to_transactions(matrix.as_array(), &labels).map_err(to_py_err)?;
        let frequent = engine(min_support, 0.0, max_len)
            .and_then(|engine| engine.mine(&transactions))
            .map_err(to_py_err)?;

        Ok(frequent
            .sorted()
            .into_iter()
            .map(|(itemset, support)| (itemset.items().to_vec(), support))
            .collect())
    }

    #[pyfn(m)]
    #[pyo3(
        name = "association_rules",
        signature = (matrix, labels, min_support, min_confidence, max_len = None)
    )]
    fn association_rules_py<'py>(
        matrix: PyReadonlyArray2<'py, i32>,
        labels: Vec<String>,
        min_support: f64,
        min_confidence: f64,
        max_len: Option<usize>,
    ) -> PyResult<Vec<PyRule>> {
        let transactions = matrix_to_transactions(matrix.as_array(), &labels).map_err(to_py_err)?;
        let engine = engine(min_support, min_confidence, max_len).map_err(to_py_err)?;
        let frequent = engine.mine(&transactions).map_err(to_py_err)?;
        let mut rules = engine.rules(&frequent).map_err(to_py_err)?;
        sort_rules(&mut rules);

        Ok(rules
            .into_iter()
            .map(|rule| {
                (
                    rule.antecedent.into(),
                    rule.consequent.into(),
                    rule.support,
                    rule.confidence,
                    rule.lift,
                )
            })
            .collect())
    }

    Ok(())
}
