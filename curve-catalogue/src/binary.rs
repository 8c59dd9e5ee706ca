//! Domain parameters for the Koblitz binary-field curves.

use crate::error::{Error, Result};
use crate::name::{CurveName, Family};
use bigint::Integer;
use binary_field::BinaryFieldElement;

/// `y^2 + xy = x^3 + ax^2 + b` over `F_{2^m}`, plus the base point `G` and
/// its order. All five Koblitz curves here use `b == 1`; `a` is either `0`
/// or `1`.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryCurveParams {
    /// The curve this parameter set belongs to.
    pub name: CurveName,
    /// The extension degree `m`.
    pub m: usize,
    /// The `a` coefficient (`0` or `1`).
    pub a: BinaryFieldElement,
    /// The `b` coefficient (always `1` for the Koblitz curves).
    pub b: BinaryFieldElement,
    /// The order of the base point's subgroup.
    pub n: Integer,
    /// The base point's `x` coordinate.
    pub gx: BinaryFieldElement,
    /// The base point's `y` coordinate.
    pub gy: BinaryFieldElement,
}

fn element(m: usize, hex: &str) -> Result<BinaryFieldElement> {
    let value = Integer::from_hex(hex)?;
    Ok(BinaryFieldElement::from_integer(m, &value)?)
}

/// Build the domain parameters for `name`. Returns [`Error::WrongFamily`]
/// if `name` names a prime curve.
///
/// Generator coordinates are SEC 2 / ANSI X9.62 `sectXXXk1` values; `K-163`
/// and `K-233` additionally match the hardcoded generator words carried by
/// the reference implementation this catalogue was built from.
pub fn params(name: CurveName) -> Result<BinaryCurveParams> {
    if name.family() != Family::Binary {
        return Err(Error::WrongFamily);
    }

    let (m, a_is_one, n_hex, gx_hex, gy_hex): (usize, bool, &str, &str, &str) = match name {
        CurveName::K163 => (
            163,
            true,
            "4000000000000000000020108a2e0cc0d99f8a5ef",
            "2fe13c0537bbc11acaa07d793de4e6d5e5c94eee8",
            "289070fb05d38ff58321f2e800536d538ccdaa3d9",
        ),
        CurveName::K233 => (
            233,
            false,
            "8000000000000000000000000000069d5bb915bcd46efb1ad5f173abdf",
            "17232ba853a7e731af129f22ff4149563a419c26bf50a4c9d6eefad6126",
            "1db537dece819b7f70f555a67c427a8cd9bf18aeb9b56e0c11056fae6a3",
        ),
        CurveName::K283 => (
            283,
            false,
            "1ffffffffffffffffffffffffffffffffffe9ae2ed07577265dff7f94451e061e163c61",
            "0503213f78ca44883f1a3b8162f188e553cd265f23c1567a16876913b0c2ac2458492836",
            "01ccda380f1c9e318d90f95d07e5426fe87e45c0e8184698e45962364e34116177dd2259",
        ),
        CurveName::K409 => (
            409,
            false,
            "7ffffffffffffffffffffffffffffffffffffffffffffffffffe5f83b2d4ea20400ec4557d5ed3e3e7ca5b4b5c83b8e01e5fcf",
            "0060f05f658f49c1ad3ab1890f7184210efd0987e307c84c27accfb8f9f67cc2c460189eb5aaaa62ee222eb1b35540cfe9023746",
            "01e369050b7c4e42acba1dacbf04299c3460782f918ea427e6325165e9ea10e3da5f6c42e9c55215aa9ca27a5863ec48d8e0286b",
        ),
        CurveName::K571 => (
            571,
            false,
            "20000000000000000000000000000000000000000000000000000000000000000000000131850e1f19a63e4b391a8db917f4138b630d84be5d639381e91deb45cfe778f637c1001",
            "026eb7a859923fbc82189631f8103fe4ac9ca2970012d5d46024804801841ca44370958493b205e647da304db4ceb08cbbd1ba39494776fb988b47174dca88c7e2945283a01c8972",
            "0349dc807f4fbf374f4aeade3bca95314dd58cec9f307a54ffc61efc006d8a2c9d4979c0ac44aea74fbebbb9f772aedcb620b01a7ba7af1b320430c8591984f601cd4c143ef1c7a3",
        ),
        _ => unreachable!("non-binary curve filtered out above"),
    };

    let a = if a_is_one {
        BinaryFieldElement::one(m)?
    } else {
        BinaryFieldElement::zero(m)?
    };
    let b = BinaryFieldElement::one(m)?;
    let n = Integer::from_hex(n_hex)?;
    let gx = element(m, gx_hex)?;
    let gy = element(m, gy_hex)?;

    Ok(BinaryCurveParams {
        name,
        m,
        a,
        b,
        n,
        gx,
        gy,
    })
}
