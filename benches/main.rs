use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paste::paste;
use std::time::Duration;

macro_rules! impl_bench_scheme {
    ($name: ident, $scheme: ident) => {
        paste! {
            fn [<bench_ $name>](criterion: &mut Criterion) {
                use ark_ff::UniformRand;
                use tlock_ibe::curve::{Point, Scalar};
                use tlock_ibe::identity::Identity;
                use tlock_ibe::scheme::{$scheme, PublicKey, Scheme, Signature};
                use tlock_ibe::{Compress, Timelock};

                let mut rng = rand::thread_rng();

                let sk = Scalar::rand(&mut rng);
                let pk = PublicKey::<$scheme>::generator().mul(&sk);
                let id = Identity::from_round(1000);
                let sig = Signature::<$scheme>::hash_to_curve(id.as_ref(), <$scheme as Scheme>::DST)
                    .mul(&sk)
                    .to_bytes();

                let tlock = Timelock::<$scheme>::new(pk.to_bytes().as_ref()).unwrap();
                let m = [0x42u8; 32];
                let c = tlock.encrypt(1000, &m, &mut rng).unwrap();

                criterion.bench_function(
                    &format!(
                        "{} hash_to_{}",
                        stringify!($name),
                        <Signature<$scheme> as Point>::NAME
                    )
                    .to_string(),
                    move |b| {
                        b.iter(|| {
                            Signature::<$scheme>::hash_to_curve(
                                black_box(id.as_ref()),
                                <$scheme as Scheme>::DST,
                            )
                        })
                    },
                );
                criterion.bench_function(
                    &format!("{} encrypt", stringify!($name)).to_string(),
                    move |b| {
                        let mut rng = rand::thread_rng();
                        b.iter(|| tlock.encrypt(black_box(1000), black_box(&m), &mut rng))
                    },
                );
                criterion.bench_function(
                    &format!("{} decrypt", stringify!($name)).to_string(),
                    move |b| b.iter(|| tlock.decrypt(black_box(sig.as_ref()), black_box(&c))),
                );
            }
        }
    };
}

impl_bench_scheme!(quicknet, Quicknet);
impl_bench_scheme!(fastnet, Fastnet);
impl_bench_scheme!(unchained_on_g2, UnchainedOnG2);

criterion_group!(
    name = tlock_benches;
    config = Criterion::default().warm_up_time(Duration::new(0, 500));
    targets =
    bench_quicknet,
    bench_fastnet,
    bench_unchained_on_g2,
);

criterion_main!(tlock_benches);
