// Exception construction, message editing and kind dispatch.
// Nothing in this binary installs a stack tracer, so every trace is empty.

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;
    use std::io;

    use exr_core::exceptions::{ExcKind, ExcResult, Exception, MathFault, MessageBuf};

// ## 1️⃣ Construction

    #[test]
    fn input_exc_carries_message_and_empty_trace() {
        let e = Exception::input("bad header");
        assert_eq!(e.message(), "bad header");
        assert_eq!(e.stack_trace(), "");
        assert_eq!(e.kind(), ExcKind::Input);
        assert_eq!(e.to_string(), "bad header");
    }

    #[test]
    fn constructs_from_literal_borrowed_and_owned_text() {
        let owned = String::from("owned");
        let borrowed = String::from("borrowed");

        assert_eq!(Exception::arg("literal").message(), "literal");
        assert_eq!(Exception::arg(borrowed.as_str()).message(), "borrowed");
        assert_eq!(Exception::arg(owned).message(), "owned");
        assert_eq!(Exception::arg("").message(), "");
    }

    #[test]
    fn default_is_empty_base() {
        let e = Exception::default();
        assert_eq!(e.kind(), ExcKind::Base);
        assert_eq!(e.message(), "");
        assert_eq!(e.stack_trace(), "");
    }

    #[test]
    fn from_buf_takes_text_and_clears_stream() {
        let mut buf = MessageBuf::new();
        write!(buf, "Cannot open \"{}\": {}", "a.exr", 42).unwrap();

        let e = Exception::from_buf(ExcKind::Io, &mut buf);
        assert_eq!(e.message(), "Cannot open \"a.exr\": 42");
        assert!(buf.is_empty());

        // The stream stays usable.
        write!(buf, "again").unwrap();
        assert_eq!(buf.as_str(), "again");
    }

// ## 2️⃣ Message editing

    #[test]
    fn assign_and_append_chain() {
        let mut e = Exception::logic("first");
        e.assign("second").append(", third").append("!");
        assert_eq!(e.message(), "second, third!");
    }

    #[test]
    fn stream_assign_and_append_clear_the_stream() {
        let mut e = Exception::input("old");
        let mut buf = MessageBuf::new();

        write!(buf, "new {}", 1).unwrap();
        e.assign_buf(&mut buf);
        assert_eq!(e.message(), "new 1");
        assert!(buf.is_empty());

        write!(buf, " + {}", 2).unwrap();
        e.append_buf(&mut buf);
        assert_eq!(e.message(), "new 1 + 2");
        assert!(buf.is_empty());
    }

    #[test]
    fn operator_forms_append() {
        let mut e = Exception::arg("a");
        e += "b";
        let mut buf = MessageBuf::from("c");
        e += &mut buf;
        assert_eq!(e.message(), "abc");
        assert!(buf.is_empty());
    }

// ## 3️⃣ Copy / move

    #[test]
    fn clone_and_move_keep_both_fields() {
        let e = Exception::with_tracer(ExcKind::Null, "null channel", Some(|| "trace".to_string()));
        let copy = e.clone();
        assert_eq!(copy, e);

        let moved = e;
        assert_eq!(moved.message(), "null channel");
        assert_eq!(moved.stack_trace(), "trace");
    }

// ## 4️⃣ Kind dispatch

    fn classify(r: ExcResult<()>) -> &'static str {
        match r {
            Ok(()) => "ok",
            Err(e) => match e.kind() {
                ExcKind::Input => "malformed input",
                ExcKind::Arg => "bad argument",
                ExcKind::NoImpl => "not implemented",
                ExcKind::Math(_) => "arithmetic",
                ExcKind::Errno(_) => "os error",
                _ => "other",
            },
        }
    }

    #[test]
    fn callers_discriminate_by_kind() {
        assert_eq!(classify(Err(Exception::input("x"))), "malformed input");
        assert_eq!(classify(Err(Exception::arg("x"))), "bad argument");
        assert_eq!(classify(Err(Exception::no_impl("x"))), "not implemented");
        assert_eq!(classify(Err(Exception::math_fault(MathFault::NullQuat, "x"))), "arithmetic");
        assert_eq!(classify(Err(Exception::errno(2, "x"))), "os error");
        assert_eq!(classify(Err(Exception::type_mismatch("x"))), "other");
        assert_eq!(classify(Ok(())), "ok");
    }

    #[test]
    fn every_constructor_sets_its_kind() {
        let cases = [
            (Exception::base("m"), ExcKind::Base),
            (Exception::arg("m"), ExcKind::Arg),
            (Exception::logic("m"), ExcKind::Logic),
            (Exception::input("m"), ExcKind::Input),
            (Exception::io("m"), ExcKind::Io),
            (Exception::math("m"), ExcKind::Math(MathFault::General)),
            (Exception::errno(13, "m"), ExcKind::Errno(13)),
            (Exception::no_impl("m"), ExcKind::NoImpl),
            (Exception::null("m"), ExcKind::Null),
            (Exception::type_mismatch("m"), ExcKind::Type),
        ];
        for (e, kind) in cases {
            assert!(e.is(kind), "{} should be {}", e.kind(), kind);
            assert_eq!(e.stack_trace(), "");
        }
    }

    #[test]
    fn math_faults_have_distinct_names() {
        let mut names: Vec<_> = MathFault::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MathFault::ALL.len());
    }

// ## 5️⃣ std::io::Error mapping

    #[test]
    fn io_errors_map_into_taxonomy() {
        let eof: Exception = io::Error::from(io::ErrorKind::UnexpectedEof).into();
        assert_eq!(eof.kind(), ExcKind::Input);
        assert!(eof.message().starts_with("Early end of file"));

        let os: Exception = io::Error::from_raw_os_error(2).into();
        assert_eq!(os.kind(), ExcKind::Errno(2));

        let other: Exception = io::Error::new(io::ErrorKind::Other, "disk on fire").into();
        assert_eq!(other.kind(), ExcKind::Io);
        assert_eq!(other.message(), "disk on fire");
    }

    #[test]
    fn is_a_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(Exception::io("write failed"));
        assert_eq!(boxed.to_string(), "write failed");
    }
}
