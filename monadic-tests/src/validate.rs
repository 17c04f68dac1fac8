use monadic::Either;

pub type PortError = &'static str;

pub fn parse_number(raw: &str) -> Either<PortError, i64> {
    Either::from(raw.trim().parse::<i64>().map_err(|_| "not a number"))
}

// ports below 1024 are reserved, arbitrary check
pub fn check_range(n: i64) -> Either<PortError, u16> {
    if n < 1024 {
        return Either::Left("reserved port");
    }

    match u16::try_from(n) {
        Ok(port) => Either::of(port),
        Err(_) => Either::Left("port out of range"),
    }
}

pub fn parse_port(raw: &str) -> Either<PortError, u16> {
    parse_number(raw).chain(check_range)
}

pub fn describe(raw: &str) -> String {
    parse_port(raw)
        .fmap(|port| format!("listening on {port}"))
        .either(|err| format!("rejected: {err}"), |msg| msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_port() {
        assert_eq!(parse_port(" 8080 "), Either::Right(8080));
        assert_eq!(describe("8080"), "listening on 8080");
    }

    #[test]
    fn first_failure_is_kept() {
        assert_eq!(parse_port("eighty"), Either::Left("not a number"));
        assert_eq!(parse_port("80"), Either::Left("reserved port"));
        assert_eq!(parse_port("70000"), Either::Left("port out of range"));
        assert_eq!(describe("80"), "rejected: reserved port");
    }

    #[test]
    fn into_result() {
        let res: Result<u16, PortError> = parse_port("9000").into();
        assert_eq!(res, Ok(9000));
    }
}
