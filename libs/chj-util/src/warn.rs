//! Printing diagnostics to stderr.

//! `warn!` writes one line `W: <message> at "<file>" line <n>`.
//! `nowarn!` has the same syntax and compiles to nothing, so a call
//! site can be silenced by adding two characters.

#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}

#[macro_export]
macro_rules! nowarn {
    ($formatstr:expr $(,$arg:expr)*) => {
    }
}

/// Like `warn!` but evaluates to the given `Result`, reporting the
/// error (if any) on the way through.
#[macro_export]
macro_rules! warn_err {
    ($context:expr, $result:expr) => { {
        let res = $result;
        if let Err(e) = &res {
            $crate::warn!("{}: {:#}", $context, e);
        }
        res
    } }
}

#[cfg(test)]
mod tests {
    #[test]
    fn t_warn_err_passes_value_through() {
        let ok: Result<u32, String> = crate::warn_err!("t", Ok(3));
        assert_eq!(ok, Ok(3));
        let err: Result<u32, String> = crate::warn_err!("t", Err("bad".into()));
        assert_eq!(err, Err("bad".to_string()));
    }
}
