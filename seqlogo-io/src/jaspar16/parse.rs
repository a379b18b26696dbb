use nom::bytes::complete::take_till1;
use nom::bytes::complete::take_while;
use nom::bytes::complete::take_while1;
use nom::character::complete::anychar;
use nom::combinator::map;
use nom::combinator::map_res;
use nom::combinator::opt;
use nom::multi::separated_list0;
use nom::sequence::delimited;
use nom::sequence::preceded;
use nom::IResult;
use nom::Parser;
use seqlogo::abc::Nucleotide;
use seqlogo::abc::Symbol;

pub fn symbol(input: &str) -> IResult<&str, Nucleotide> {
    map_res(anychar, Nucleotide::from_char).parse(input)
}

pub fn token(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace() || c == ']').parse(input)
}

pub fn space0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace).parse(input)
}

pub fn space1(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace).parse(input)
}

pub fn counts(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        (space0, nom::character::complete::char('['), space0),
        separated_list0(space1, map(token, crate::count)),
        (space0, opt(nom::character::complete::char(']'))),
    )
    .parse(input)
}

pub fn row(input: &str) -> IResult<&str, (Nucleotide, Vec<f64>)> {
    preceded(space0, (symbol, counts)).parse(input)
}

/// Read the identifier and description of a header line.
pub fn header(line: &str) -> Option<(&str, Option<&str>)> {
    let line = line.trim();
    let line = line.strip_prefix('>').unwrap_or(line).trim_start();
    if line.is_empty() {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        None => Some((line, None)),
        Some((id, rest)) => {
            let description = rest.trim();
            Some((id, Some(description).filter(|d| !d.is_empty())))
        }
    }
}
