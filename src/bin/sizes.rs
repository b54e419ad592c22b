//! This file produces a binary that prints the sizes of the timelock components
//! such as the public key, round signature and ciphertext, per beacon scheme.

macro_rules! print_sizes {
    ($scheme: ident) => {{
        use tlock_ibe::ciphertext::Ciphertext;
        use tlock_ibe::curve::Point;
        use tlock_ibe::scheme::{$scheme, PublicKey, Scheme, Signature};
        use tlock_ibe::Compress;

        type Ct = Ciphertext<<$scheme as Scheme>::Engine>;

        let mut rng = rand::thread_rng();

        let pk = PublicKey::<$scheme>::generator();
        let tlock = tlock_ibe::Timelock::<$scheme>::new(pk.to_bytes().as_ref()).unwrap();
        let c = tlock.encrypt(1, &[0u8; 32], &mut rng).unwrap();

        println!("{} ({})", stringify!($scheme), <$scheme as Scheme>::IDENTIFIER);
        println!(
            "PK:\t{} ({})",
            <PublicKey<$scheme> as Compress>::OUTPUT_SIZE,
            <PublicKey<$scheme> as Point>::NAME
        );
        println!(
            "SIG:\t{} ({})",
            <Signature<$scheme> as Compress>::OUTPUT_SIZE,
            <Signature<$scheme> as Point>::NAME
        );
        println!("U:\t{}", Ct::U_BYTES);
        println!("CT:\t{} + 2 * len, {} for 32 bytes\n", Ct::U_BYTES, c.to_bytes().len());
    }};
}

fn main() {
    println!("Timelock sizes in bytes:\n");
    print_sizes!(Quicknet);
    print_sizes!(Fastnet);
    print_sizes!(UnchainedOnG2);
}
