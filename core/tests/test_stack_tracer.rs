// Process-wide stack tracer hook.
// Every test here mutates global state, so they serialize on TRACER_LOCK and
// restore "no tracer" before releasing it.

#[cfg(test)]
mod tests {
    use std::thread;

    use parking_lot::Mutex;

    use exr_core::exceptions::{
        capture_backtrace, set_stack_tracer, stack_tracer, ExcKind, Exception, MessageBuf,
    };

    static TRACER_LOCK: Mutex<()> = parking_lot::const_mutex(());

    fn tracer_a() -> String {
        "trace-a".to_string()
    }

    fn tracer_b() -> String {
        "trace-b".to_string()
    }

    #[test]
    fn install_then_remove() {
        let _guard = TRACER_LOCK.lock();
        set_stack_tracer(None);

        assert!(stack_tracer().is_none());
        assert_eq!(Exception::input("bad header").stack_trace(), "");

        set_stack_tracer(Some(tracer_a));
        assert_eq!(stack_tracer().map(|t| t()), Some("trace-a".to_string()));
        let e = Exception::input("bad header");
        assert_eq!(e.message(), "bad header");
        assert_eq!(e.stack_trace(), "trace-a");

        // Traces are captured at construction, not read lazily.
        set_stack_tracer(Some(tracer_b));
        assert_eq!(e.stack_trace(), "trace-a");
        assert_eq!(Exception::logic("x").stack_trace(), "trace-b");

        set_stack_tracer(None);
        assert!(stack_tracer().is_none());
        assert_eq!(Exception::input("bad header").stack_trace(), "");
    }

    #[test]
    fn every_traced_constructor_runs_the_hook() {
        let _guard = TRACER_LOCK.lock();
        set_stack_tracer(Some(tracer_a));

        let mut buf = MessageBuf::from("streamed");
        let built = [
            Exception::new(ExcKind::Type, "new"),
            Exception::from_buf(ExcKind::Arg, &mut buf),
            Exception::errno(5, "eio"),
            Exception::no_impl("later"),
        ];
        for e in &built {
            assert_eq!(e.stack_trace(), "trace-a", "{}", e.kind());
        }

        // Default and clone never call the hook.
        assert_eq!(Exception::default().stack_trace(), "");
        set_stack_tracer(Some(tracer_b));
        assert_eq!(built[0].clone().stack_trace(), "trace-a");

        set_stack_tracer(None);
    }

    #[test]
    fn injected_tracer_overrides_global() {
        let _guard = TRACER_LOCK.lock();
        set_stack_tracer(Some(tracer_a));

        let e = Exception::with_tracer(ExcKind::Io, "x", Some(tracer_b));
        assert_eq!(e.stack_trace(), "trace-b");
        let quiet = Exception::with_tracer(ExcKind::Io, "x", None);
        assert_eq!(quiet.stack_trace(), "");

        set_stack_tracer(None);
    }

    #[test]
    fn backtrace_tracer_produces_text() {
        let _guard = TRACER_LOCK.lock();
        set_stack_tracer(Some(capture_backtrace));

        let e = Exception::input("with backtrace");
        assert!(!e.stack_trace().is_empty());

        set_stack_tracer(None);
    }

    #[test]
    fn concurrent_replacement_never_tears_a_trace() {
        let _guard = TRACER_LOCK.lock();
        set_stack_tracer(None);

        let workers: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..2_000 {
                        let e = Exception::input("race");
                        let t = e.stack_trace();
                        assert!(t.is_empty() || t == "trace-a" || t == "trace-b", "torn trace {:?}", t);
                    }
                })
            })
            .collect();

        for i in 0..2_000 {
            match i % 3 {
                0 => set_stack_tracer(Some(tracer_a)),
                1 => set_stack_tracer(Some(tracer_b)),
                _ => set_stack_tracer(None),
            }
        }
        for w in workers {
            w.join().unwrap();
        }

        set_stack_tracer(None);
    }
}
