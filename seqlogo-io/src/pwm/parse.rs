use nom::bytes::complete::take_till1;
use nom::bytes::complete::take_while;
use nom::bytes::complete::take_while1;
use nom::multi::separated_list0;
use nom::sequence::preceded;
use nom::IResult;
use nom::Parser;

pub fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace()).parse(input)
}

pub fn field_list(input: &str) -> IResult<&str, Vec<&str>> {
    preceded(
        take_while(char::is_whitespace),
        separated_list0(take_while1(char::is_whitespace), field),
    )
    .parse(input)
}

/// Split a line into its whitespace-separated fields.
pub fn fields(line: &str) -> Vec<&str> {
    match field_list(line) {
        Ok((_, fields)) => fields,
        Err(_) => Vec::new(),
    }
}

/// Read the counts of a data line, which has exactly 6 fields.
pub fn position(fields: &[&str]) -> Option<[f64; 4]> {
    match fields {
        [_, a, c, g, t, _] => Some([a, c, g, t].map(|x| crate::count(x))),
        _ => None,
    }
}

/// Read the factor name and accession of a `DE` header line.
pub fn header<'a>(fields: &[&'a str]) -> Option<(&'a str, Option<&'a str>)> {
    match fields {
        ["DE", name, rest @ ..] => Some((*name, rest.first().copied())),
        _ => None,
    }
}
