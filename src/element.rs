use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    H,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
    Cs,
    Ba,
    La,
    Ce,
    Pr,
    Nd,
    Pm,
    Sm,
    Eu,
    Gd,
    Tb,
    Dy,
    Ho,
    Er,
    Tm,
    Yb,
    Lu,
    Hf,
    Ta,
    W,
    Re,
    Os,
    Ir,
    Pt,
    Au,
    Hg,
    Tl,
    Pb,
    Bi,
    Po,
    At,
    Rn,
    Fr,
    Ra,
    Ac,
    Th,
    Pa,
    U,
    Np,
    Pu,
    Am,
    Cm,
    Bk,
    Cf,
    Es,
    Fm,
    Md,
    No,
    Lr,
    Rf,
    Db,
    Sg,
    Bh,
    Hs,
    Mt,
    Ds,
    Rg,
    Cn,
    Nh,
    Fl,
    Mc,
    Lv,
    Ts,
    Og,
}

struct ElementData {
    element: Element,
    symbol: &'static str,
    atomic_number: u8,
    /// Allowed valences, lowest first. Empty means "not checked".
    valences: &'static [u8],
}

// Indexed by `Element as usize`, which is the atomic number minus one.
const TABLE: &[ElementData] = &[
    entry(Element::H, "H", 1, &[1]),
    entry(Element::He, "He", 2, &[0]),
    entry(Element::Li, "Li", 3, &[1]),
    entry(Element::Be, "Be", 4, &[2]),
    entry(Element::B, "B", 5, &[3]),
    entry(Element::C, "C", 6, &[4]),
    entry(Element::N, "N", 7, &[3]),
    entry(Element::O, "O", 8, &[2]),
    entry(Element::F, "F", 9, &[1]),
    entry(Element::Ne, "Ne", 10, &[0]),
    entry(Element::Na, "Na", 11, &[1]),
    entry(Element::Mg, "Mg", 12, &[2]),
    entry(Element::Al, "Al", 13, &[3]),
    entry(Element::Si, "Si", 14, &[4]),
    entry(Element::P, "P", 15, &[3, 5, 7]),
    entry(Element::S, "S", 16, &[2, 4, 6]),
    entry(Element::Cl, "Cl", 17, &[1]),
    entry(Element::Ar, "Ar", 18, &[0]),
    entry(Element::K, "K", 19, &[1]),
    entry(Element::Ca, "Ca", 20, &[2]),
    entry(Element::Sc, "Sc", 21, &[]),
    entry(Element::Ti, "Ti", 22, &[]),
    entry(Element::V, "V", 23, &[]),
    entry(Element::Cr, "Cr", 24, &[]),
    entry(Element::Mn, "Mn", 25, &[]),
    entry(Element::Fe, "Fe", 26, &[]),
    entry(Element::Co, "Co", 27, &[]),
    entry(Element::Ni, "Ni", 28, &[]),
    entry(Element::Cu, "Cu", 29, &[]),
    entry(Element::Zn, "Zn", 30, &[]),
    entry(Element::Ga, "Ga", 31, &[3]),
    entry(Element::Ge, "Ge", 32, &[4]),
    entry(Element::As, "As", 33, &[3, 5, 7]),
    entry(Element::Se, "Se", 34, &[2, 4, 6]),
    entry(Element::Br, "Br", 35, &[1]),
    entry(Element::Kr, "Kr", 36, &[0]),
    entry(Element::Rb, "Rb", 37, &[1]),
    entry(Element::Sr, "Sr", 38, &[2]),
    entry(Element::Y, "Y", 39, &[]),
    entry(Element::Zr, "Zr", 40, &[]),
    entry(Element::Nb, "Nb", 41, &[]),
    entry(Element::Mo, "Mo", 42, &[]),
    entry(Element::Tc, "Tc", 43, &[]),
    entry(Element::Ru, "Ru", 44, &[]),
    entry(Element::Rh, "Rh", 45, &[]),
    entry(Element::Pd, "Pd", 46, &[]),
    entry(Element::Ag, "Ag", 47, &[]),
    entry(Element::Cd, "Cd", 48, &[]),
    entry(Element::In, "In", 49, &[3]),
    entry(Element::Sn, "Sn", 50, &[2, 4]),
    entry(Element::Sb, "Sb", 51, &[3, 5, 7]),
    entry(Element::Te, "Te", 52, &[2, 4, 6]),
    entry(Element::I, "I", 53, &[1, 3, 5]),
    entry(Element::Xe, "Xe", 54, &[0, 2, 4, 6]),
    entry(Element::Cs, "Cs", 55, &[1]),
    entry(Element::Ba, "Ba", 56, &[2]),
    entry(Element::La, "La", 57, &[]),
    entry(Element::Ce, "Ce", 58, &[]),
    entry(Element::Pr, "Pr", 59, &[]),
    entry(Element::Nd, "Nd", 60, &[]),
    entry(Element::Pm, "Pm", 61, &[]),
    entry(Element::Sm, "Sm", 62, &[]),
    entry(Element::Eu, "Eu", 63, &[]),
    entry(Element::Gd, "Gd", 64, &[]),
    entry(Element::Tb, "Tb", 65, &[]),
    entry(Element::Dy, "Dy", 66, &[]),
    entry(Element::Ho, "Ho", 67, &[]),
    entry(Element::Er, "Er", 68, &[]),
    entry(Element::Tm, "Tm", 69, &[]),
    entry(Element::Yb, "Yb", 70, &[]),
    entry(Element::Lu, "Lu", 71, &[]),
    entry(Element::Hf, "Hf", 72, &[]),
    entry(Element::Ta, "Ta", 73, &[]),
    entry(Element::W, "W", 74, &[]),
    entry(Element::Re, "Re", 75, &[]),
    entry(Element::Os, "Os", 76, &[]),
    entry(Element::Ir, "Ir", 77, &[]),
    entry(Element::Pt, "Pt", 78, &[]),
    entry(Element::Au, "Au", 79, &[]),
    entry(Element::Hg, "Hg", 80, &[]),
    entry(Element::Tl, "Tl", 81, &[1, 3]),
    entry(Element::Pb, "Pb", 82, &[2, 4]),
    entry(Element::Bi, "Bi", 83, &[3, 5]),
    entry(Element::Po, "Po", 84, &[2, 4, 6]),
    entry(Element::At, "At", 85, &[1]),
    entry(Element::Rn, "Rn", 86, &[0]),
    entry(Element::Fr, "Fr", 87, &[1]),
    entry(Element::Ra, "Ra", 88, &[2]),
    entry(Element::Ac, "Ac", 89, &[]),
    entry(Element::Th, "Th", 90, &[]),
    entry(Element::Pa, "Pa", 91, &[]),
    entry(Element::U, "U", 92, &[]),
    entry(Element::Np, "Np", 93, &[]),
    entry(Element::Pu, "Pu", 94, &[]),
    entry(Element::Am, "Am", 95, &[]),
    entry(Element::Cm, "Cm", 96, &[]),
    entry(Element::Bk, "Bk", 97, &[]),
    entry(Element::Cf, "Cf", 98, &[]),
    entry(Element::Es, "Es", 99, &[]),
    entry(Element::Fm, "Fm", 100, &[]),
    entry(Element::Md, "Md", 101, &[]),
    entry(Element::No, "No", 102, &[]),
    entry(Element::Lr, "Lr", 103, &[]),
    entry(Element::Rf, "Rf", 104, &[]),
    entry(Element::Db, "Db", 105, &[]),
    entry(Element::Sg, "Sg", 106, &[]),
    entry(Element::Bh, "Bh", 107, &[]),
    entry(Element::Hs, "Hs", 108, &[]),
    entry(Element::Mt, "Mt", 109, &[]),
    entry(Element::Ds, "Ds", 110, &[]),
    entry(Element::Rg, "Rg", 111, &[]),
    entry(Element::Cn, "Cn", 112, &[]),
    entry(Element::Nh, "Nh", 113, &[]),
    entry(Element::Fl, "Fl", 114, &[]),
    entry(Element::Mc, "Mc", 115, &[]),
    entry(Element::Lv, "Lv", 116, &[]),
    entry(Element::Ts, "Ts", 117, &[]),
    entry(Element::Og, "Og", 118, &[]),
];

const fn entry(
    element: Element,
    symbol: &'static str,
    atomic_number: u8,
    valences: &'static [u8],
) -> ElementData {
    ElementData {
        element,
        symbol,
        atomic_number,
        valences,
    }
}

impl Element {
    pub fn from_symbol(symbol: &str) -> Option<Element> {
        TABLE
            .iter()
            .find(|data| data.symbol == symbol)
            .map(|data| data.element)
    }

    pub fn from_atomic_number(atomic_number: u8) -> Option<Element> {
        TABLE
            .iter()
            .find(|data| data.atomic_number == atomic_number)
            .map(|data| data.element)
    }

    pub fn symbol(self) -> &'static str {
        self.data().symbol
    }

    pub fn atomic_number(self) -> u8 {
        self.data().atomic_number
    }

    pub fn valences(self) -> &'static [u8] {
        self.data().valences
    }

    /// Valences allowed for an ion of this element, using the valence list
    /// of the isoelectronic neutral element (N+ behaves like C, O- like F).
    /// Returns an empty slice when no rule is known.
    pub fn valences_for_charge(self, charge: i8) -> &'static [u8] {
        if charge == 0 {
            return self.valences();
        }
        let shifted = i16::from(self.atomic_number()) - i16::from(charge);
        u8::try_from(shifted)
            .ok()
            .and_then(Element::from_atomic_number)
            .map(|element| element.valences())
            .unwrap_or(&[])
    }

    /// Members of the SMILES organic subset may be written without brackets.
    pub fn is_organic(self) -> bool {
        matches!(
            self,
            Element::B
                | Element::C
                | Element::N
                | Element::O
                | Element::P
                | Element::S
                | Element::F
                | Element::Cl
                | Element::Br
                | Element::I
        )
    }

    /// Elements that may appear as lowercase aromatic atoms outside brackets.
    pub fn is_aromatic_organic(self) -> bool {
        matches!(
            self,
            Element::B | Element::C | Element::N | Element::O | Element::P | Element::S
        )
    }

    /// Elements that may appear as lowercase aromatic atoms inside brackets.
    pub fn can_be_aromatic(self) -> bool {
        self.is_aromatic_organic() || matches!(self, Element::Se | Element::As | Element::Te)
    }

    fn data(self) -> &'static ElementData {
        &TABLE[self as usize]
    }
}
