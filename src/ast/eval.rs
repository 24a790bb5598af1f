//! 式の評価

use super::{BinaryOp, Node, Operator};
use crate::error::{EvalError, EvalResult};

impl Node {
    /// 木を評価する
    ///
    /// 左部分木を先に評価し、失敗した場合は右部分木を評価しない。
    /// 木は変更しないので何度呼んでも同じ結果になる。
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Node::Operand(o) => Ok(o.value),
            Node::Operator(o) => o.evaluate(),
        }
    }
}

impl Operator {
    fn evaluate(&self) -> EvalResult<f64> {
        let left = self.left.evaluate()?;
        let right = self.right.evaluate()?;

        let result = apply(self.op, left, right);
        match &result {
            Ok(value) => log::trace!("{} {} {} = {}", left, self.op, right, value),
            Err(e) => log::debug!("evaluation failed at `{} {} {}`: {}", left, self.op, right, e),
        }
        result
    }
}

/// 二項演算を適用する
pub(crate) fn apply(op: BinaryOp, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Subtract => Ok(left - right),
        BinaryOp::Multiply => Ok(left * right),
        BinaryOp::Divide => {
            // -0.0 も 0 として扱う
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        }
        BinaryOp::Power => Ok(left.powf(right)),
    }
}
