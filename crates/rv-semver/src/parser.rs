use winnow::{
    ModalResult, Parser,
    combinator::{cut_err, eof, not, opt, preceded, separated},
    error::{ContextError, ErrMode, StrContext},
    token::{rest, take_while},
};

use crate::{Version, VersionError};

type Input<'i> = &'i str;

type Res<T> = ModalResult<T, ContextError>;

/// Parse a Semantic Versioning 2.0.0 version, e.g. `1.0.0-rc.1+build.5`.
///
/// The whole input must match. A leading `v` is accepted and dropped.
pub fn parse(input: &str) -> Result<Version, VersionError> {
    parse_version.parse(input).map_err(|e| {
        let offset = e.offset();
        let reason = reason(e.inner());
        tracing::debug!(input, offset, reason, "Rejected malformed version");
        VersionError::malformed(input, offset, reason)
    })
}

/// The innermost label attached to a failure.
fn reason(err: &ContextError) -> &'static str {
    err.context()
        .find_map(|context| match context {
            StrContext::Label(label) => Some(*label),
            _ => None,
        })
        .unwrap_or("unexpected trailing characters")
}

/// Equivalent to the anchored regex
/// `v?(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(-PRERELEASE)?(\+BUILD)?`.
fn parse_version(i: &mut Input<'_>) -> Res<Version> {
    let _ = opt('v').parse_next(i)?;

    let major = parse_numeric
        .context(StrContext::Label("invalid major version"))
        .parse_next(i)?;
    let minor = preceded('.', parse_numeric)
        .context(StrContext::Label("invalid minor version"))
        .parse_next(i)?;
    let patch = preceded('.', parse_numeric)
        .context(StrContext::Label("invalid patch version"))
        .parse_next(i)?;

    let prerelease = opt(preceded('-', parse_prerelease)).parse_next(i)?;
    let build = opt(preceded('+', parse_build)).parse_next(i)?;

    Ok(Version {
        major,
        minor,
        patch,
        prerelease: prerelease.unwrap_or_default().to_owned(),
        build: build.unwrap_or_default().to_owned(),
    })
}

/// `0|[1-9][0-9]*`, as a u64.
fn parse_numeric(i: &mut Input<'_>) -> Res<u64> {
    digits
        .and_then(preceded(no_leading_zero, decimal))
        .parse_next(i)
}

fn decimal(i: &mut Input<'_>) -> Res<u64> {
    rest.try_map(|digits: &str| digits.parse::<u64>())
        .context(StrContext::Label("number too large"))
        .parse_next(i)
}

/// `[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*`, where digit-only identifiers
/// can't start with a zero.
fn parse_prerelease<'i>(i: &mut Input<'i>) -> Res<&'i str> {
    dot_separated(prerelease_identifier).take().parse_next(i)
}

/// `[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*`
fn parse_build<'i>(i: &mut Input<'i>) -> Res<&'i str> {
    dot_separated(build_identifier).take().parse_next(i)
}

/// Once a `-` or `+` has been seen there is nothing to backtrack to, so
/// every identifier is committed.
fn dot_separated<'i, P>(identifier: P) -> impl Parser<Input<'i>, (), ErrMode<ContextError>>
where
    P: Parser<Input<'i>, &'i str, ErrMode<ContextError>>,
{
    separated(1.., cut_err(identifier), '.')
}

fn prerelease_identifier<'i>(i: &mut Input<'i>) -> Res<&'i str> {
    identifier
        .and_then(preceded(no_leading_zero, rest))
        .context(StrContext::Label("invalid prerelease identifier"))
        .parse_next(i)
}

fn build_identifier<'i>(i: &mut Input<'i>) -> Res<&'i str> {
    identifier
        .context(StrContext::Label("invalid build identifier"))
        .parse_next(i)
}

fn identifier<'i>(i: &mut Input<'i>) -> Res<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-').parse_next(i)
}

fn digits<'i>(i: &mut Input<'i>) -> Res<&'i str> {
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(i)
}

/// Fails on a run of two or more digits starting with `0`. Consumes nothing.
fn no_leading_zero(i: &mut Input<'_>) -> Res<()> {
    not(('0', digits, eof))
        .context(StrContext::Label("leading zero"))
        .parse_next(i)
}
