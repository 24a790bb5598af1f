//! 評価パイプラインモジュール
//!
//! 式の文字列を受け取り、字句解析 → 後置記法変換 → AST構築 → 評価 の各段階を
//! 実行する。エラーはcodespan-reportingの診断として元の式の位置付きで報告できる。

use crate::ast::Node;
use crate::error::{DiagnosticError, EvalResult, ExprError, ExprResult};
use crate::lexer::{tokenize, TokenWithPosition};
use crate::parser::{build_ast, postfix_from_tokens};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use std::fs;
use std::path::Path;

/// 評価対象の式とソース情報
pub struct EvaluationState {
    pub source_name: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
}

impl EvaluationState {
    /// ファイルから評価状態を作成
    pub fn new<P: AsRef<Path>>(source_file: P) -> ExprResult<Self> {
        let source_name = source_file.as_ref().display().to_string();
        let source = fs::read_to_string(source_file.as_ref())
            .map_err(|e| ExprError::Io(format!("Failed to read {}: {}", source_name, e)))?;
        Ok(Self::new_from_string(&source_name, source))
    }

    /// 文字列から評価状態を作成
    pub fn new_from_string(source_name: &str, source: String) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(source_name.to_string(), source.clone());

        Self {
            source_name: source_name.to_string(),
            source,
            files,
            file_id,
        }
    }

    /// エラーを診断として標準エラー出力に報告
    pub fn report_error(&self, error: &ExprError) -> ExprResult<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();
        let diagnostic = DiagnosticError::new(error.clone(), self.file_id).to_diagnostic();

        let mut stream = writer.lock();
        let result = codespan_reporting::term::emit(&mut stream, &config, &self.files, &diagnostic)
            .map_err(|e| ExprError::Io(format!("Failed to emit diagnostic: {}", e)));
        result
    }
}

/// 1つの式の評価結果
///
/// 評価に失敗しても木の各表現は得られるので、`result` だけがエラーになる。
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub expression: String,
    pub prefix: String,
    pub postfix: String,
    pub infix: String,
    pub tree: String,
    pub result: EvalResult<f64>,
}

impl Evaluation {
    /// 構築済みの木から各表現と評価結果を求める
    pub fn from_ast(expression: &str, ast: &Node) -> Self {
        let result = ast.evaluate();
        Self {
            expression: expression.to_string(),
            prefix: ast.prefix(),
            postfix: ast.postfix(),
            infix: ast.to_string(),
            tree: ast.formatted_string(""),
            result,
        }
    }
}

/// 評価パイプライン
pub struct Pipeline {
    state: EvaluationState,
    verbose: bool,
}

impl Pipeline {
    /// 新しいパイプラインを作成
    pub fn new(state: EvaluationState, verbose: bool) -> Self {
        Self { state, verbose }
    }

    /// 評価状態への参照を取得
    pub fn state(&self) -> &EvaluationState {
        &self.state
    }

    /// 字句解析を実行
    pub fn tokenize(&self) -> ExprResult<Vec<TokenWithPosition>> {
        if self.verbose {
            log::info!("step: tokenizing {:?}", self.state.source);
        }
        Ok(tokenize(&self.state.source)?)
    }

    /// 後置記法への変換を実行
    pub fn postfix(&self, tokens: &[TokenWithPosition]) -> ExprResult<Vec<String>> {
        if self.verbose {
            log::info!("step: converting {} tokens to postfix", tokens.len());
        }
        Ok(postfix_from_tokens(tokens)?)
    }

    /// AST構築を実行
    pub fn build(&self, postfix: &[String]) -> ExprResult<Node> {
        if self.verbose {
            log::info!("step: building tree from `{}`", postfix.join(" "));
        }
        Ok(build_ast(postfix)?)
    }

    /// パイプライン全体を実行
    pub fn run(&self) -> ExprResult<Evaluation> {
        let tokens = self.tokenize()?;
        let postfix = self.postfix(&tokens)?;
        let ast = self.build(&postfix)?;

        if self.verbose {
            log::info!("step: evaluating {}", ast);
        }
        Ok(Evaluation::from_ast(&self.state.source, &ast))
    }

    /// エラーを診断として報告
    pub fn report_error(&self, error: &ExprError) -> ExprResult<()> {
        self.state.report_error(error)
    }
}

/// 複数行入力の1行分の結果
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// 1始まりの行番号
    pub line: usize,
    pub expression: String,
    pub outcome: ExprResult<f64>,
}

/// 空行を除く各行を独立した式として評価する
pub fn evaluate_lines(source: &str) -> Vec<LineOutcome> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let outcome = crate::parse(line)
                .map_err(ExprError::from)
                .and_then(|ast| ast.evaluate().map_err(ExprError::from));
            if let Err(e) = &outcome {
                log::debug!("line {}: {}", index + 1, e);
            }
            LineOutcome {
                line: index + 1,
                expression: line.to_string(),
                outcome,
            }
        })
        .collect()
}

/// ファイルを読み込んで各行を評価する
pub fn evaluate_file<P: AsRef<Path>>(path: P) -> ExprResult<Vec<LineOutcome>> {
    let state = EvaluationState::new(path)?;
    log::info!("evaluating {}", state.source_name);
    Ok(evaluate_lines(&state.source))
}
