use hex_literal::hex;
use hmac::{Mac, SimpleHmac};
use skein::{
    digest::{consts::U128, DynDigest},
    BlockLength, Digest, DigestEngine, Error, Skein224, Skein256, Skein384, Skein512, Skein512Core,
};

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

/// `0xFF, 0xFE, ...` as used by the submission's known-answer tests.
fn descending(len: usize) -> Vec<u8> {
    (0..len).map(|i| (255 - i) as u8).collect()
}

fn hash<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

#[test]
fn skein224_kat() {
    assert_eq!(
        hash::<Skein224>(b""),
        hex!("1541ae9fc3ebe24eb758ccb1fd60c2c31a9ebfe65b220086e7819e25")
    );
    assert_eq!(
        hash::<Skein224>(b"abc"),
        hex!("0c71f7dda7e1fb752544c93e821c2a0a1f991a694db5f60fd48de904")
    );
    assert_eq!(
        hash::<Skein224>(FOX),
        hex!("d5ba2ed1238ec5c8d294b8fbc574848ad2b1a1a56dd887c340065acc")
    );
}

#[test]
fn skein256_kat() {
    assert_eq!(
        hash::<Skein256>(b""),
        hex!("39ccc4554a8b31853b9de7a1fe638a24cce6b35a55f2431009e18780335d2621")
    );
    assert_eq!(
        hash::<Skein256>(b"abc"),
        hex!("0977b339c3c85927071805584d5460d8f20da8389bbe97c59b1cfac291fe9527")
    );
    assert_eq!(
        hash::<Skein256>(FOX),
        hex!("b3250457e05d3060b1a4bbc1428bc75a3f525ca389aeab96cfa34638d96e492a")
    );
    assert_eq!(
        hash::<Skein256>(&[0u8; 64]),
        hex!("24e8a5a2bdbf2f5540a2a181b8caa52559da938a6d8006b26a70f8e3f3d741f6")
    );
    assert_eq!(
        hash::<Skein256>(&[b'a'; 1000]),
        hex!("67aeec59e56f81853efae58cbd15d7ba9050d3cc63d2bf4c419cce990b008de6")
    );
}

#[test]
fn skein384_kat() {
    assert_eq!(
        hash::<Skein384>(b""),
        hex!(
            "dd5aaf4589dc227bd1eb7bc68771f5baeaa3586ef6c7680167a023ec8ce26980"
            "f06c4082c488b4ac9ef313f8cbe70808"
        )
    );
    assert_eq!(
        hash::<Skein384>(b"abc"),
        hex!(
            "b4329745321c8f6b788a04526dad856b4a87f510ee496b743f61b048209fc326"
            "1c1ebbb8a35040a7ff58c34378c4536c"
        )
    );
    assert_eq!(
        hash::<Skein384>(FOX),
        hex!(
            "f814c107f3465e7c54048a5503547deddc377264f05c706b0d19db4847b35485"
            "5ee52ab6a785c238c9e710d848542041"
        )
    );
}

#[test]
fn skein512_kat() {
    assert_eq!(
        hash::<Skein512>(b""),
        hex!(
            "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af4"
            "1fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a"
        )
    );
    assert_eq!(
        hash::<Skein512>(b"abc"),
        hex!(
            "8f5dd9ec798152668e35129496b029a960c9a9b88662f7f9482f110b31f9f938"
            "93ecfb25c009baad9e46737197d5630379816a886aa05526d3a70df272d96e75"
        )
    );
    assert_eq!(
        hash::<Skein512>(FOX),
        hex!(
            "94c2ae036dba8783d0b3f7d6cc111ff810702f5c77707999be7e1c9486ff238a"
            "7044de734293147359b4ac7e1d09cd247c351d69826b78dcddd951f0ef912713"
        )
    );
}

#[test]
fn skein512_submission_kat() {
    assert_eq!(
        hash::<Skein512>(&[0xFF]),
        hex!(
            "71b7bce6fe6452227b9ced6014249e5bf9a9754c3ad618ccc4e0aae16b316cc8"
            "ca698d864307ed3e80b6ef1570812ac5272dc409b5a012df2a579102f340617a"
        )
    );
    assert_eq!(
        hash::<Skein512>(&descending(64)),
        hex!(
            "45863ba3be0c4dfc27e75d358496f4ac9a736a505d9313b42b2f5eada79fc17f"
            "63861e947afb1d056aa199575ad3f8c9a3cc1780b5e5fa4cae050e989876625b"
        )
    );
    assert_eq!(
        hash::<Skein512>(&descending(128)),
        hex!(
            "91cca510c263c4ddd010530a33073309628631f308747e1bcbaa90e451cab92e"
            "5188087af4188773a332303e6667a7a210856f742139000071f48e8ba2a5adb7"
        )
    );
}

#[test]
fn block_boundaries() {
    // one short of, exactly at, and one past a block
    assert_eq!(
        hash::<Skein512>(&descending(63)),
        hex!(
            "e4aaf93270fee6f9c3d390add9120ce80c73b44d23e623c052514918cc5c48e4"
            "109befb4423c99233c358b83e5302b43feea3a04de0d9c3f7a3291a7ef90614b"
        )
    );
    assert_eq!(
        hash::<Skein512>(&descending(65)),
        hex!(
            "e5065da3e1b683cd7b9ca2d8e2f5623fbadd3c45246d4b54a40aafdb277d7505"
            "b4a9c45b8c6dab6719f7a01f65f8319dd8aa60c70356844f4340f610a19792b2"
        )
    );

    let mut hasher = Skein512::default();
    hasher.update(descending(128));
    assert_eq!(hasher.block_count(), 1);
    assert_eq!(hasher.buffered_len(), 64);
}

#[test]
fn long_output() {
    let mut hasher = DigestEngine::<Skein512Core<U128>>::default();
    assert_eq!(hasher.to_string(), "Skein-512-1024");
    assert_eq!(
        hasher.digest()[..],
        hex!(
            "8c339f4249efd1880ceda3ea247c4de4521821d5bc15036bd2794a391e4f448f"
            "832c2c92292841034a96689fa750c07e89a595f4909fc065c522205e697d1634"
            "b08d0d58e913ac374c6a6b46eba7ea5af3978495602724cd851853ac94badc2f"
            "98c2360283a8b33b7710ff4610d14103f6a8ae2348a799679976a837c5b4aef2"
        )[..]
    );
}

#[test]
fn chunked_input_matches_one_shot() {
    let data: Vec<u8> = (0..200).map(|i| (i % 251) as u8).collect();
    let expected = hex!(
        "59d7f27c018c72b4d2de9b0bdfb87956aa5ec81c0d5be095f8446c598fa31f3e"
        "d74ab66a948cce35cf7831748eb48042b60d09a97d7124dc025b2de166ffb80d"
    );

    let mut hasher = Skein512::default();
    for &b in &data {
        hasher.update_byte(b);
    }
    assert_eq!(hasher.digest()[..], expected[..]);

    for step in [1, 7, 63, 64, 65, 128, 199] {
        for chunk in data.chunks(step) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.digest()[..], expected[..], "step {}", step);
    }

    hasher.update_range(&data, 0, 100).unwrap();
    hasher.update_range(&data, 100, 100).unwrap();
    assert_eq!(hasher.digest()[..], expected[..]);
}

#[test]
fn reset_idempotence() {
    let mut hasher = Skein384::default();
    hasher.update(FOX);
    let first = hasher.digest();
    hasher.update(FOX);
    let second = hasher.digest();
    assert_eq!(first, second);
    assert_eq!(first[..], hash::<Skein384>(FOX)[..]);

    hasher.update(b"discarded");
    hasher.reset();
    assert_eq!(hasher.digest()[..], hash::<Skein384>(b"")[..]);
}

#[test]
fn copy_independence() {
    let mut left = Skein256::default();
    left.update(&FOX[..20]);
    let mut right = left.copy();

    left.update(&FOX[20..]);
    right.update(b"!");
    let (l, r) = (left.digest(), right.digest());
    assert_ne!(l, r);
    assert_eq!(l[..], hash::<Skein256>(FOX)[..]);
    assert_eq!(r[..], hash::<Skein256>(&[&FOX[..20], &b"!"[..]].concat())[..]);
}

#[test]
fn truncation() {
    let full = hash::<Skein512>(FOX);
    for k in [0, 1, 16, 32, 63, 64, 100] {
        let mut hasher = Skein512::default();
        hasher.update(FOX);
        let mut buf = [0u8; 128];
        let written = hasher.digest_into(&mut buf, 0, k).unwrap();
        assert_eq!(written, k.min(64));
        assert_eq!(buf[..written], full[..written]);
    }

    let mut hasher = Skein512::default();
    hasher.update(FOX);
    let mut small = [0u8; 32];
    assert_eq!(
        hasher.digest_into(&mut small, 0, 64),
        Err(Error::BufferTooSmall {
            required: 64,
            available: 32
        })
    );
    assert_eq!(hasher.digest_into(&mut small, 0, 32), Ok(32));
    assert_eq!(small[..], full[..32]);
}

#[test]
fn names_and_sizes() {
    let cases: [(Box<dyn DynDigest>, String, usize); 4] = [
        (Box::new(Skein224::default()), Skein224::default().to_string(), 28),
        (Box::new(Skein256::default()), Skein256::default().to_string(), 32),
        (Box::new(Skein384::default()), Skein384::default().to_string(), 48),
        (Box::new(Skein512::default()), Skein512::default().to_string(), 64),
    ];
    let names = ["Skein-224", "Skein-256", "Skein-384", "Skein-512"];
    for ((digest, name, size), expected) in cases.iter().zip(names.iter()) {
        assert_eq!(name, expected);
        assert_eq!(digest.output_size(), *size);
    }

    let hasher = Skein256::default();
    assert_eq!(hasher.digest_length(), 32);
    assert_eq!(hasher.block_length(), BlockLength::Fixed(64));
    assert_eq!(format!("{:?}", hasher), "Skein-256 { ... }");
}

#[test]
fn hmac_over_engine() {
    let mut mac = <SimpleHmac<Skein512> as Mac>::new_from_slice(b"key").unwrap();
    mac.update(FOX);
    let tag = mac.finalize().into_bytes();
    assert_eq!(
        tag[..],
        hex!(
            "7aed8b245c28b55bde77fb37fa8e2b45db83ccf5e808d65fecff2be5a77b0cb3"
            "443e86af3c41bedeb7852a40854f3a873e38b916f75ef335f67b7dabd9c0ea21"
        )[..]
    );

    let mut mac = <SimpleHmac<Skein512> as Mac>::new_from_slice(&[b'k'; 100]).unwrap();
    mac.update(b"abc");
    assert_eq!(
        mac.finalize().into_bytes()[..],
        hex!(
            "4c56aa8a9bc105f9b119554c42ec1169e44368c13d13e83295cbc020cb3087bd"
            "cb6b18a853ff2f8ad54c6fd0ce23237113e39e911b021915aff0797ca4485c43"
        )[..]
    );
}

/// HMAC with precomputed inner/outer contexts branched off by `copy`.
#[test]
fn hmac_contexts_via_copy() {
    let key = b"key";
    let bs = Skein512::default().block_length().key_block_size(key.len());
    let mut padded = vec![0u8; bs];
    padded[..key.len()].copy_from_slice(key);

    let mut inner = Skein512::default();
    inner.update(padded.iter().map(|b| b ^ 0x36).collect::<Vec<u8>>());
    let mut outer = Skein512::default();
    outer.update(padded.iter().map(|b| b ^ 0x5c).collect::<Vec<u8>>());

    for msg in [FOX, &b"abc"[..], &b""[..]] {
        let mut i = inner.copy();
        i.update(msg);
        let mut o = outer.copy();
        o.update(i.digest());

        let mut mac = <SimpleHmac<Skein512> as Mac>::new_from_slice(key).unwrap();
        mac.update(msg);
        assert_eq!(o.digest()[..], mac.finalize().into_bytes()[..]);
    }
    // the shared prefixes are untouched by the branches
    assert_eq!(inner.block_count(), 0);
    assert_eq!(inner.buffered_len(), 64);
}
