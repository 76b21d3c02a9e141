use std::io;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use tokio::time::{sleep, Instant};
use sonar::{Config, Echo, Error, Exchange, Lookup, Result, Sonar};

struct Resolver(Option<IpAddr>, AtomicUsize);

#[async_trait]
impl Lookup for Resolver {
    async fn lookup(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
        self.1.fetch_add(1, Ordering::SeqCst);
        Ok(self.0.into_iter().collect())
    }
}

/// Replies to every even sequence number after 15ms, drops the rest.
#[derive(Default)]
struct EvenEcho(AtomicUsize);

#[async_trait]
impl Echo for EvenEcho {
    async fn echo(&self, _addr: IpAddr, seq: u16, payload: &[u8]) -> Result<Exchange> {
        assert_eq!(payload.len(), 24);
        self.0.fetch_add(1, Ordering::SeqCst);

        if seq % 2 == 1 {
            return Err(Error::Timeout);
        }

        let sent = Instant::now();
        sleep(Duration::from_millis(15)).await;
        Ok(Exchange { sent, rcvd: Instant::now() })
    }
}

fn config(host: &str) -> Config {
    Config::new(host, 24, Duration::from_millis(500), Duration::from_secs(1)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn ping_until_interrupted() {
    let addr   = IpAddr::from([198, 51, 100, 20]);
    let lookup = Resolver(Some(addr), AtomicUsize::new(0));
    let sonar  = Sonar::new(config("echo.example"), lookup);

    let session = sonar.start(|_, _| Ok(EvenEcho::default())).await.unwrap();
    let summary = sonar.run(&session, sleep(Duration::from_millis(3200))).await;

    let seqs = session.series().probes().iter().map(|p| p.seq).collect::<Vec<_>>();

    assert_eq!(seqs, vec![2, 4, 6]);
    assert_eq!(summary.count, 3);

    let spread = summary.spread.expect("spread");
    assert!((spread.mean - 15.0).abs() < 1e-9);
    assert!(spread.stdev.abs() < 1e-9);
}

#[tokio::test]
async fn literal_address_skips_dns() {
    let lookup = Resolver(None, AtomicUsize::new(0));
    let sonar  = Sonar::new(config("2001:db8::1"), lookup);

    let session = sonar.start(|_, _| Ok(EvenEcho::default())).await.unwrap();

    assert_eq!(session.target().addr, "2001:db8::1".parse::<IpAddr>().unwrap());
}

#[tokio::test]
async fn unresolvable_host_aborts_startup() {
    let lookup = Resolver(None, AtomicUsize::new(0));
    let sonar  = Sonar::new(config("nothing.example"), lookup);

    let result = sonar.start(|_, _| -> Result<EvenEcho> {
        panic!("echo facility opened for an unresolved host")
    }).await;

    match result {
        Err(Error::Resolution { host, .. }) => assert_eq!(host, "nothing.example"),
        Err(e) => panic!("unexpected error {}", e),
        Ok(_)  => panic!("startup succeeded"),
    }
}

#[tokio::test(start_paused = true)]
async fn immediate_interrupt_reports_zero() {
    let sonar   = Sonar::new(config("127.0.0.1"), Resolver(None, AtomicUsize::new(0)));
    let session = sonar.start(|_, _| Ok(EvenEcho::default())).await.unwrap();
    let summary = sonar.run(&session, async {}).await;

    assert_eq!(summary.count, 0);
    assert!(summary.spread.is_none());
    assert_eq!(summary.to_string(), "--- ping statistics ---\n0 requests over 0ms");
}
