/*!
# BasicML Reference

A BasicML program is a plain text file with one signed decimal word per
line. All words in a file are the same width: 4 characters in the old
format or 6 in the new one, the sign taking a column when present. The
first line fixes the format for the whole file. Blank lines are
ignored, surrounding whitespace is trimmed, and a line of `-99999` (or
the legacy `-9999`) ends the program early.

Words double as instructions and data. An instruction splits into a
two-digit opcode and an operand naming a memory address: `1005` in the
old format means `READ` into address 5, and the same instruction in the
new format is written `010005`. Memory holds 250 words (the original
machine held 100), all zero until loaded or stored.

## Instruction set

| Code | Mnemonic   | Effect |
|------|------------|--------|
| 10   | READ       | read a word from the keyboard into memory |
| 11   | WRITE      | display a memory word |
| 20   | LOAD       | memory word into the accumulator |
| 21   | STORE      | accumulator into a memory word |
| 30   | ADD        | add a memory word to the accumulator |
| 31   | SUBTRACT   | subtract a memory word from the accumulator |
| 32   | DIVIDE     | divide the accumulator by a memory word |
| 33   | MULTIPLY   | multiply the accumulator by a memory word |
| 40   | BRANCH     | jump to an address |
| 41   | BRANCHNEG  | jump if the accumulator is negative |
| 42   | BRANCHZERO | jump if the accumulator is zero |
| 43   | HALT       | stop normally |

Anything else faults the machine with `INVALID OPCODE`. Arithmetic that
leaves the accumulator outside the format's range faults with
`OVERFLOW` and the accumulator keeps its previous value; dividing by a
zero word faults with `DIVISION BY ZERO`. Division rounds toward
negative infinity.

## A complete program

Read two numbers, print their sum, old format:

```text
1007
1008
2007
3008
2109
1109
4300
```

Addresses 7 through 9 hold the two inputs and the sum; the program
occupies addresses 0 through 6 and halts at the end.

*/
